#![allow(dead_code)]

use morph::{
    ast::{Expr, Func, Type, Value, ValueRecord},
    bail, construct, init, load_nested_option, nested_option_value, register, schema, Mapping,
    Model, Primitive, Result,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Department {
    pub name: String,
    pub budget: i64,
    pub head: Option<Person>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Employee {
    pub name: String,
    pub age: i64,
    pub nickname: Option<String>,
    pub dept: Option<Department>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDto {
    pub full_name: String,
    pub dept_name: Option<String>,
    pub age: i64,
}

/// Who an employee reports to, read two nullable links deep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportingLine {
    pub name: String,
    pub head_name: Option<String>,
    pub shout: Option<String>,
    pub team: Option<String>,
}

/// An immutable value object: built through its constructor only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Badge {
    pub label: String,
    pub budget: i64,
}

impl Model for Person {
    fn schema() -> schema::Model {
        schema::Model::new(Self::id(), "Person").with_field("name", String::ty())
    }

    fn to_value(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![self.name.to_value()])
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Person {
            name: String::load(record.take(0))?,
        })
    }

    fn assign(&mut self, field: usize, value: Value) -> Result<()> {
        match field {
            0 => self.name = String::load(value)?,
            _ => bail!("`Person` has no field {field}"),
        }
        Ok(())
    }
}

impl Model for Department {
    fn schema() -> schema::Model {
        schema::Model::new(Self::id(), "Department")
            .with_field("name", String::ty())
            .with_field("budget", i64::ty())
            .with_field("head", Type::option(Person::id()))
    }

    fn register_nested(builder: &mut schema::Builder) {
        register::<Person>(builder);
    }

    fn to_value(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![
            self.name.to_value(),
            self.budget.to_value(),
            nested_option_value(&self.head),
        ])
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Department {
            name: String::load(record.take(0))?,
            budget: i64::load(record.take(1))?,
            head: load_nested_option(record.take(2))?,
        })
    }

    fn assign(&mut self, field: usize, value: Value) -> Result<()> {
        match field {
            0 => self.name = String::load(value)?,
            1 => self.budget = i64::load(value)?,
            2 => self.head = load_nested_option(value)?,
            _ => bail!("`Department` has no field {field}"),
        }
        Ok(())
    }
}

impl Model for Employee {
    fn schema() -> schema::Model {
        schema::Model::new(Self::id(), "Employee")
            .with_field("name", String::ty())
            .with_field("age", i64::ty())
            .with_field("nickname", Option::<String>::ty())
            .with_field("dept", Type::option(Department::id()))
    }

    fn register_nested(builder: &mut schema::Builder) {
        register::<Department>(builder);
    }

    fn to_value(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![
            self.name.to_value(),
            self.age.to_value(),
            self.nickname.to_value(),
            nested_option_value(&self.dept),
        ])
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Employee {
            name: String::load(record.take(0))?,
            age: i64::load(record.take(1))?,
            nickname: Option::load(record.take(2))?,
            dept: load_nested_option(record.take(3))?,
        })
    }

    fn assign(&mut self, field: usize, value: Value) -> Result<()> {
        match field {
            0 => self.name = String::load(value)?,
            1 => self.age = i64::load(value)?,
            2 => self.nickname = Option::load(value)?,
            3 => self.dept = load_nested_option(value)?,
            _ => bail!("`Employee` has no field {field}"),
        }
        Ok(())
    }
}

impl Model for EmployeeDto {
    fn schema() -> schema::Model {
        schema::Model::new(Self::id(), "EmployeeDto")
            .with_field("full_name", String::ty())
            .with_field("dept_name", Option::<String>::ty())
            .with_field("age", i64::ty())
    }

    fn to_value(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![
            self.full_name.to_value(),
            self.dept_name.to_value(),
            self.age.to_value(),
        ])
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(EmployeeDto {
            full_name: String::load(record.take(0))?,
            dept_name: Option::load(record.take(1))?,
            age: i64::load(record.take(2))?,
        })
    }

    fn assign(&mut self, field: usize, value: Value) -> Result<()> {
        match field {
            0 => self.full_name = String::load(value)?,
            1 => self.dept_name = Option::load(value)?,
            2 => self.age = i64::load(value)?,
            _ => bail!("`EmployeeDto` has no field {field}"),
        }
        Ok(())
    }
}

impl Model for ReportingLine {
    fn schema() -> schema::Model {
        schema::Model::new(Self::id(), "ReportingLine")
            .with_field("name", String::ty())
            .with_field("head_name", Option::<String>::ty())
            .with_field("shout", Option::<String>::ty())
            .with_field("team", Option::<String>::ty())
    }

    fn to_value(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![
            self.name.to_value(),
            self.head_name.to_value(),
            self.shout.to_value(),
            self.team.to_value(),
        ])
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(ReportingLine {
            name: String::load(record.take(0))?,
            head_name: Option::load(record.take(1))?,
            shout: Option::load(record.take(2))?,
            team: Option::load(record.take(3))?,
        })
    }

    fn assign(&mut self, field: usize, value: Value) -> Result<()> {
        match field {
            0 => self.name = String::load(value)?,
            1 => self.head_name = Option::load(value)?,
            2 => self.shout = Option::load(value)?,
            3 => self.team = Option::load(value)?,
            _ => bail!("`ReportingLine` has no field {field}"),
        }
        Ok(())
    }
}

impl Model for Badge {
    fn schema() -> schema::Model {
        schema::Model::new(Self::id(), "Badge")
            .with_readonly_field("label", String::ty())
            .with_readonly_field("budget", i64::ty())
    }

    fn to_value(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![self.label.to_value(), self.budget.to_value()])
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Badge {
            label: String::load(record.take(0))?,
            budget: i64::load(record.take(1))?,
        })
    }

    fn assign(&mut self, field: usize, _value: Value) -> Result<()> {
        bail!("`Badge` field {field} is read-only")
    }
}

pub fn ada() -> Employee {
    Employee {
        name: "Ada".to_string(),
        age: 36,
        nickname: None,
        dept: None,
    }
}

pub fn grace() -> Employee {
    Employee {
        name: "Grace".to_string(),
        age: 45,
        nickname: Some("Amazing Grace".to_string()),
        dept: Some(Department {
            name: "Navy".to_string(),
            budget: 1200,
            head: None,
        }),
    }
}

/// Works in a department that has a head.
pub fn linus() -> Employee {
    Employee {
        name: "Linus".to_string(),
        age: 28,
        nickname: Some("torvalds".to_string()),
        dept: Some(Department {
            name: "Kernel".to_string(),
            budget: 0,
            head: Some(Person {
                name: "Andrew".to_string(),
            }),
        }),
    }
}

pub fn staff() -> Vec<Employee> {
    vec![ada(), grace(), linus()]
}

/// `EmployeeDto { full_name = name, dept_name = dept.name, age = age }`
/// with no author-written null checks.
pub fn employee_dto() -> Mapping<Employee, EmployeeDto> {
    Mapping::new(|src| {
        init::<EmployeeDto>([
            ("full_name", src.field("name")),
            ("dept_name", src.field("dept").field("name")),
            ("age", src.field("age")),
        ])
    })
}

/// Same as [`employee_dto`] with the department read behind an explicit
/// null check.
pub fn employee_dto_guarded() -> Mapping<Employee, EmployeeDto> {
    Mapping::new(|src| {
        init::<EmployeeDto>([
            ("full_name", src.field("name")),
            (
                "dept_name",
                Expr::cond(
                    Expr::ne_null(src.field("dept")),
                    src.field("dept").field("name"),
                    Expr::null(),
                ),
            ),
            ("age", src.field("age")),
        ])
    })
}

pub fn employee_badge() -> Mapping<Employee, Badge> {
    Mapping::new(|src| construct::<Badge>([src.field("name"), src.field("dept").field("budget")]))
}

/// Reads through `dept.head` and through casts and concatenations of
/// nullable strings, none of it behind an author-written null check.
pub fn reporting_line() -> Mapping<Employee, ReportingLine> {
    Mapping::new(|src| {
        init::<ReportingLine>([
            ("name", src.field("name")),
            ("head_name", src.field("dept").field("head").field("name")),
            (
                "shout",
                Expr::method(
                    Expr::cast(src.field("nickname"), Type::String),
                    Func::ToUppercase,
                    Vec::<Expr>::new(),
                ),
            ),
            (
                "team",
                Expr::method(
                    Expr::add(
                        src.field("nickname"),
                        src.field("dept").field("head").field("name"),
                    ),
                    Func::ToUppercase,
                    Vec::<Expr>::new(),
                ),
            ),
        ])
    })
}

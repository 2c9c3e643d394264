mod support;
use support::*;

use morph::{
    ast::Value,
    query::{MemoryProvider, Plan, Provider, SourceId},
    CompiledMapper, Model, Query, Result,
};
use pretty_assertions::assert_eq;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

fn provider() -> (Arc<MemoryProvider>, SourceId) {
    let mut provider = MemoryProvider::new();
    let source = provider.insert(staff());
    (Arc::new(provider), source)
}

#[test]
fn projection_matches_in_memory_map() {
    let mapper = CompiledMapper::new(&employee_dto()).unwrap();
    let (provider, source) = provider();

    let projected = mapper
        .project(provider.query::<Employee>(source))
        .exec()
        .unwrap();

    let mapped: Vec<_> = staff()
        .iter()
        .map(|employee| mapper.map(Some(employee)).unwrap().unwrap())
        .collect();

    assert_eq!(projected, mapped);
}

#[test]
fn constructor_mapping_projects() {
    let mapper = CompiledMapper::new(&employee_badge()).unwrap();
    let (provider, source) = provider();

    let badges = mapper
        .project(provider.query::<Employee>(source))
        .exec()
        .unwrap();

    let budgets: Vec<_> = badges.iter().map(|badge| badge.budget).collect();
    assert_eq!(budgets, [0, 1200, 0]);
}

#[test]
fn unprojected_query_loads_sources() {
    let (provider, source) = provider();

    let employees = provider.query::<Employee>(source).exec().unwrap();
    assert_eq!(employees, staff());
}

/// Counts executions and otherwise forwards to an in-memory provider.
struct Counting {
    inner: MemoryProvider,
    executions: AtomicUsize,
}

impl Provider for Counting {
    fn execute(&self, plan: &Plan) -> Result<Vec<Value>> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        self.inner.execute(plan)
    }
}

#[test]
fn projection_is_lazy_and_restartable() {
    let mut inner = MemoryProvider::new();
    let source = inner.insert(staff());
    let provider = Arc::new(Counting {
        inner,
        executions: AtomicUsize::new(0),
    });

    let mapper = CompiledMapper::new(&employee_dto()).unwrap();
    let query: Query<EmployeeDto> = mapper.project(Query::new(provider.clone(), source));

    assert_eq!(provider.executions.load(Ordering::SeqCst), 0);
    assert_eq!(
        query.plan().to_string(),
        format!("source(0) |> |arg(0)| {}", mapper.projection().body)
    );

    let first = query.exec().unwrap();
    let second = query.exec().unwrap();

    assert_eq!(provider.executions.load(Ordering::SeqCst), 2);
    assert_eq!(first, second);
}

#[test]
fn cursor_loads_rows_one_at_a_time() {
    let mapper = CompiledMapper::new(&employee_dto()).unwrap();
    let (provider, source) = provider();

    let mut cursor = mapper
        .project(provider.query::<Employee>(source))
        .iter()
        .unwrap();

    assert_eq!(cursor.size_hint(), (3, Some(3)));
    assert_eq!(cursor.next().unwrap().unwrap().full_name, "Ada");
    assert_eq!(cursor.size_hint(), (2, Some(2)));
}

#[test]
fn provider_returns_destination_records() {
    let to_dto = CompiledMapper::new(&employee_dto()).unwrap();
    let (provider, source) = provider();

    let query = to_dto.project(provider.query::<Employee>(source));
    assert_eq!(query.plan().projections.len(), 1);
    assert_eq!(query.plan().projections[0], *to_dto.projection());

    let records = provider.execute(query.plan()).unwrap();
    assert_eq!(
        records[1],
        Value::Record(
            EmployeeDto {
                full_name: "Grace".to_string(),
                dept_name: Some("Navy".to_string()),
                age: 45,
            }
            .to_value()
        )
    );
}

#[test]
fn unknown_source_is_rejected() {
    let provider = Arc::new(MemoryProvider::new());

    let err = provider.query::<Employee>(SourceId(3)).exec().unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn nested_chain_projection_matches_in_memory_map() {
    let mapper = CompiledMapper::new(&reporting_line()).unwrap();
    let (provider, source) = provider();

    let projected = mapper
        .project(provider.query::<Employee>(source))
        .exec()
        .unwrap();

    let head_names: Vec<_> = projected
        .iter()
        .map(|line| line.head_name.as_deref())
        .collect();
    assert_eq!(head_names, [None, None, Some("Andrew")]);

    for (line, employee) in projected.iter().zip(staff()) {
        assert_eq!(Some(line), mapper.map(Some(&employee)).unwrap().as_ref());
    }
}

use std::collections::BTreeMap;
use std::sync::Once;

use diagramcache::{
    new_diagram_cache, Diagram, DiagramCache, Error, InMemoryDiagramCache, MarkupDiagram,
    SharedDiagramCache,
};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::TRACE.into()),
            )
            .with_test_writer()
            .try_init();
    });
}

fn flowchart(source: &str) -> MarkupDiagram {
    MarkupDiagram::new("flowchart", source)
}

#[test]
fn test_lifecycle_scenario() {
    init_tracing();
    let mut cache = InMemoryDiagramCache::new();
    let a = flowchart("graph TD; A-->B").with_output(b"A --> B".to_vec());

    cache.store(a.clone()).unwrap();
    assert!(cache.has(&a).unwrap());
    assert_eq!(*cache.get(&a).unwrap().unwrap(), a);

    cache.delete(&a).unwrap();
    assert!(!cache.has(&a).unwrap());
    assert!(cache.get_all().unwrap().is_empty());
}

#[test]
fn test_description_finds_rendered_diagram() {
    init_tracing();
    let mut cache = InMemoryDiagramCache::new();
    let description = flowchart("graph LR; X-->Y").with_attribute("style", "ascii");

    assert!(cache.get(&description).unwrap().is_none());

    cache
        .store(description.clone().with_output(b"X --> Y".to_vec()))
        .unwrap();

    let cached = cache.get(&description).unwrap().unwrap();
    assert_eq!(cached.output.as_deref(), Some(&b"X --> Y"[..]));
    assert_eq!(cached.description(), description);
}

#[test]
fn test_rerender_overwrites() {
    init_tracing();
    let mut cache = InMemoryDiagramCache::new();
    let description = flowchart("graph TD; A-->B");

    cache.store(description.clone().with_output(b"v1".to_vec())).unwrap();
    cache.store(description.clone().with_output(b"v2".to_vec())).unwrap();

    let all = cache.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].output.as_deref(), Some(&b"v2"[..]));
}

#[test]
fn test_delete_is_idempotent() {
    init_tracing();
    let mut cache = new_diagram_cache::<MarkupDiagram>();
    let a = flowchart("graph TD; A-->B");

    cache.delete(&a).unwrap();
    cache.store(a.clone()).unwrap();
    cache.delete(&a).unwrap();
    cache.delete(&a).unwrap();

    assert!(!cache.has(&a).unwrap());
}

/// Diagram whose attributes cannot be turned into an ID
#[derive(Debug, Clone)]
struct Unserializable {
    attributes: BTreeMap<Vec<u8>, String>,
}

impl Diagram for Unserializable {
    type Error = serde_json::Error;

    fn id(&self) -> Result<String, Self::Error> {
        // Map keys must be strings in JSON
        serde_json::to_string(&self.attributes)
    }
}

#[test]
fn test_id_failures_surface_everywhere() {
    init_tracing();
    let mut attributes = BTreeMap::new();
    attributes.insert(vec![0u8, 1], "bytes".to_string());
    let bad = Unserializable { attributes };

    let mut cache = InMemoryDiagramCache::new();

    let err = cache.store(bad.clone()).unwrap_err();
    assert!(err.to_string().starts_with("cannot get diagram ID"));
    assert!(matches!(cache.has(&bad), Err(Error::Identifier { .. })));
    assert!(matches!(cache.get(&bad), Err(Error::Identifier { .. })));
    assert!(matches!(cache.delete(&bad), Err(Error::Identifier { .. })));
    assert!(cache.is_empty());
}

#[test]
fn test_shared_cache_is_a_drop_in() {
    init_tracing();

    fn fill(cache: &mut dyn DiagramCache<Diagram = MarkupDiagram>) {
        for i in 0..5 {
            cache.store(flowchart(&format!("graph TD; A-->N{}", i))).unwrap();
        }
    }

    let mut local: InMemoryDiagramCache<MarkupDiagram> = InMemoryDiagramCache::new();
    let mut shared: SharedDiagramCache<InMemoryDiagramCache<MarkupDiagram>> =
        SharedDiagramCache::in_memory();

    fill(&mut local);
    fill(&mut shared);

    assert_eq!(local.len(), 5);
    assert_eq!(shared.len(), 5);
}

#[test]
fn test_default_cache_behind_lock() {
    init_tracing();
    let cache = SharedDiagramCache::new(new_diagram_cache::<MarkupDiagram>());
    let description = flowchart("graph TD; A-->B");

    let writer = {
        let cache = cache.clone();
        let rendered = description.clone().with_output(b"A --> B".to_vec());
        std::thread::spawn(move || cache.store(rendered).unwrap())
    };
    writer.join().unwrap();

    let cached = cache.get(&description).unwrap().unwrap();
    assert!(cached.is_rendered());
    assert_eq!(cache.get_all().unwrap().len(), 1);
}

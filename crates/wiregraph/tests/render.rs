use pretty_assertions::assert_eq;

use wiregraph::{
    FilterBuilder, GraphObject, ObjectFilter, ObjectRef, RenderOptions, StaticRelation,
    render_object_graph, render_object_graph_filtered, render_object_graph_with,
};

struct Logger {
    _sink: &'static str,
}

impl GraphObject for Logger {}

struct Worker<'a> {
    logger: &'a Logger,
}

impl GraphObject for Worker<'_> {
    fn dependencies(&self) -> Vec<&dyn GraphObject> {
        vec![self.logger]
    }
}

struct Server<'a> {
    workers: Vec<&'a Worker<'a>>,
    logger: &'a Logger,
}

impl GraphObject for Server<'_> {
    fn dependencies(&self) -> Vec<&dyn GraphObject> {
        let mut deps: Vec<&dyn GraphObject> = Vec::new();
        for worker in &self.workers {
            deps.push(*worker);
        }
        deps.push(self.logger);
        deps
    }
}

fn fixture<'a>(logger: &'a Logger, w1: &'a Worker<'a>, w2: &'a Worker<'a>) -> Server<'a> {
    Server {
        workers: vec![w1, w2],
        logger,
    }
}

#[test]
fn worked_scenario_renders_exact_text() {
    let logger = Logger { _sink: "stderr" };
    let w1 = Worker { logger: &logger };
    let w2 = Worker { logger: &logger };
    let server = fixture(&logger, &w1, &w2);

    let dot = render_object_graph(&server).expect("render");

    // The two workers are structurally symmetric, so the text does not
    // depend on which one received which instance number.
    assert_eq!(
        dot,
        "strict digraph {\n\
         \x20 \"Logger\" [shape=box];\n\
         \x20 \"Server\" [shape=box];\n\
         \x20 \"Worker # 1/2\" [shape=box];\n\
         \x20 \"Worker # 2/2\" [shape=box];\n\
         \x20 \"Server\" -> \"Logger\"\n\
         \x20 \"Server\" -> \"Worker # 1/2\"\n\
         \x20 \"Server\" -> \"Worker # 2/2\"\n\
         \x20 \"Worker # 1/2\" -> \"Logger\"\n\
         \x20 \"Worker # 2/2\" -> \"Logger\"\n\
         }\n"
    );
}

#[test]
fn repeated_renders_are_byte_identical() {
    let logger = Logger { _sink: "stderr" };
    let w1 = Worker { logger: &logger };
    let w2 = Worker { logger: &logger };
    let server = fixture(&logger, &w1, &w2);

    let first = render_object_graph(&server).expect("first render");
    let second = render_object_graph(&server).expect("second render");
    assert_eq!(first, second);
}

#[test]
fn singleton_types_carry_no_suffix() {
    let logger = Logger { _sink: "stderr" };
    let w1 = Worker { logger: &logger };
    let server = Server {
        workers: vec![&w1],
        logger: &logger,
    };

    let dot = render_object_graph(&server).expect("render");
    assert!(dot.contains("\"Worker\" [shape=box];"));
    assert!(!dot.contains('#'));
}

#[test]
fn filter_prunes_denied_objects() {
    let logger = Logger { _sink: "stderr" };
    let w1 = Worker { logger: &logger };
    let w2 = Worker { logger: &logger };
    let server = fixture(&logger, &w1, &w2);

    let filter = ObjectFilter::new(|object| !object.type_name().ends_with("Logger"));
    let dot = render_object_graph_filtered(&server, &filter).expect("render");

    assert!(!dot.contains("Logger"));
    assert!(dot.contains("\"Server\" -> \"Worker # 1/2\""));
    assert!(dot.contains("\"Server\" -> \"Worker # 2/2\""));
}

#[test]
fn prefix_filter_built_from_patterns() {
    let logger = Logger { _sink: "stderr" };
    let w1 = Worker { logger: &logger };
    let w2 = Worker { logger: &logger };
    let server = fixture(&logger, &w1, &w2);

    // Integration-test types live under the `render` crate root.
    let filter = FilterBuilder::new()
        .allow_prefix("render::")
        .build()
        .expect("valid filter");
    let dot = render_object_graph_filtered(&server, &filter).expect("render");

    assert!(dot.contains("\"Server\""));
    assert!(dot.contains("\"Logger\""));
}

#[test]
fn custom_style_and_static_relation() {
    let logger = Logger { _sink: "stderr" };
    let w1 = Worker { logger: &logger };
    let root = Server {
        workers: vec![&w1],
        logger: &logger,
    };

    let relation = StaticRelation::new(vec![(
        ObjectRef::new(&root),
        ObjectRef::new(&logger),
    )]);
    let options = RenderOptions::new().with_node_style("[shape=ellipse]");

    let dot = render_object_graph_with(&root, &ObjectFilter::accept_all(), &relation, &options)
        .expect("render");

    assert_eq!(
        dot,
        "strict digraph {\n\
         \x20 \"Logger\" [shape=ellipse];\n\
         \x20 \"Server\" [shape=ellipse];\n\
         \x20 \"Server\" -> \"Logger\"\n\
         }\n"
    );
}

#[test]
fn empty_graph_renders_bare_frame() {
    let logger = Logger { _sink: "stderr" };
    let dot = render_object_graph(&logger).expect("render");
    assert_eq!(dot, "strict digraph {\n}\n");
}

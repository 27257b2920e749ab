//! Renders a small service wiring and prints the DOT text to stdout.
//!
//! Run with `RUST_LOG=trace` to watch the walker's traversal decisions.

use wiregraph::{FilterBuilder, GraphObject, render_object_graph, render_object_graph_filtered};

struct Config {
    _path: &'static str,
}

impl GraphObject for Config {}

struct Logger {
    _sink: &'static str,
}

impl GraphObject for Logger {}

struct Pool<'a> {
    logger: &'a Logger,
    config: &'a Config,
}

impl GraphObject for Pool<'_> {
    fn dependencies(&self) -> Vec<&dyn GraphObject> {
        vec![self.logger, self.config]
    }
}

struct Server<'a> {
    pools: Vec<&'a Pool<'a>>,
    logger: &'a Logger,
    config: &'a Config,
}

impl GraphObject for Server<'_> {
    fn dependencies(&self) -> Vec<&dyn GraphObject> {
        let mut deps: Vec<&dyn GraphObject> = Vec::new();
        for pool in &self.pools {
            deps.push(*pool);
        }
        deps.push(self.logger);
        deps.push(self.config);
        deps
    }
}

fn main() -> wiregraph::Result<()> {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let config = Config {
        _path: "/etc/app.toml",
    };
    let logger = Logger { _sink: "stderr" };
    let read_pool = Pool {
        logger: &logger,
        config: &config,
    };
    let write_pool = Pool {
        logger: &logger,
        config: &config,
    };
    let server = Server {
        pools: vec![&read_pool, &write_pool],
        logger: &logger,
        config: &config,
    };

    println!("{}", render_object_graph(&server)?);

    // The same wiring with configuration objects hidden.
    let filter = FilterBuilder::new().deny("::Config$").build()?;
    println!("{}", render_object_graph_filtered(&server, &filter)?);

    Ok(())
}

//! Top-level client wiring the runtime to a frontend.
//!
//! ```text
//! Client
//!   ├─→ Runtime  (simulation worker, event bus)
//!   └─→ Frontend (input and rendering, via RuntimeHandle only)
//! ```

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Composition root holding the runtime and the frontend that drives it.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives an already-built runtime and a frontend
/// 2. `Client::run()` hands a `RuntimeHandle` to the frontend and waits
/// 3. When the frontend returns, the runtime worker is shut down
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Runs the frontend to completion, then stops the runtime.
    ///
    /// A frontend error takes precedence over a shutdown error.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        tracing::info!(seed = runtime.seed(), "client starting");
        let frontend_result = frontend.run(runtime.handle()).await;

        let shutdown_result = runtime.shutdown().await;
        if let Err(error) = &shutdown_result {
            tracing::error!("runtime shutdown failed: {error}");
        }

        frontend_result?;
        shutdown_result?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use game_core::{CardinalDirection, HeroCommand, World};
    use runtime::{Runtime, RuntimeHandle};

    /// Submits one step, checks the world it was given, and quits.
    struct HeadlessFrontend;

    #[async_trait]
    impl Frontend for HeadlessFrontend {
        async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
            handle
                .submit(HeroCommand::Move(CardinalDirection::East))
                .await?;
            let world = handle.query_state().await?;
            anyhow::ensure!(world.dimensions().width == 3, "unexpected world");
            Ok(())
        }
    }

    #[tokio::test]
    async fn run_hands_control_to_frontend_and_shuts_down() {
        let world = World::from_rows(&["@.."]).unwrap();
        let runtime = Runtime::builder()
            .world(world)
            .seed(3)
            .build()
            .await
            .unwrap();

        let client = Client::builder()
            .runtime(runtime)
            .frontend(HeadlessFrontend)
            .build()
            .unwrap();

        client.run().await.unwrap();
    }

    #[test]
    fn build_requires_runtime() {
        let result = Client::builder().frontend(HeadlessFrontend).build();
        assert!(result.is_err());
    }
}

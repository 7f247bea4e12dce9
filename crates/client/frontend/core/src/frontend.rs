//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the game via [`RuntimeHandle`]: they subscribe
/// to events, submit hero input, and query the current world. They do not
/// own the runtime.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::RuntimeHandle;
/// use anyhow::Result;
///
/// struct HeadlessFrontend;
///
/// #[async_trait]
/// impl Frontend for HeadlessFrontend {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut events = handle.subscribe(runtime::Topic::Lifecycle);
///         let _ = events.recv().await;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}

//! Font preview sessions and the process-scoped registry behind them

pub mod registry;
pub mod session;

pub use registry::{FontRegistry, ProcessFontRegistry, RegistrationHandle, RegistryError};
pub use session::{PreviewLoader, PreviewSession, RenderableFontHandle};

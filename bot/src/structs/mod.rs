pub mod colours;
pub mod display;
pub mod link;
pub mod media;
pub mod message;
pub mod reply;

pub use colours::ColourCycler;
pub use display::{DisplayUnit, LinkButton, RenderedComment};
pub use link::ParsedLink;
pub use message::{Author, ResolvedAttachment, ResolvedEmbed, ResolvedField, ResolvedMessage};
pub use reply::{Outlet, Reply, Visibility};

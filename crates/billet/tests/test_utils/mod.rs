//! Test utilities for billet tests.
//!
//! Mock provider and storage implementations with scripted responses and
//! call counting, so retry behavior can be asserted without any network.

pub mod mock_image;
pub mod mock_text;

#[allow(unused_imports)]
pub use mock_image::{MemoryArtifactStore, MockImageProvider, MockImageResponse};
#[allow(unused_imports)]
pub use mock_text::{MockResponse, MockTextProvider};

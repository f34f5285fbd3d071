mod go_version;
mod pinned_version;

pub use go_version::{GoVersionPolicy, GO_ZERO_VERSION};
pub use pinned_version::{PinnedVersionPolicy, PYPI_ZERO_VERSION};

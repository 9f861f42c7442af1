pub use crate::emoji::{EmojiExtensions, EmojiWithLikeState, LikeToggle};
pub use crate::storage::EmojiStorageClient;
pub use crate::user_profile::UserProfileExtensions;

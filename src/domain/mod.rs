mod game;
mod slug;

pub use game::{
    DetailResponse, ErrorRecord, GameDetail, GameSummary, DETAIL_FETCH_FAILED, NO_DOWNLOAD_LINK,
    NO_GENERAL_NOTE,
};
pub use slug::{SlugCodec, DEFAULT_BASE_URL};

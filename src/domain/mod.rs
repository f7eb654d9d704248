pub mod article;
pub mod episode;
pub mod feed;
pub mod podcast;
pub mod view_type;

pub use article::Article;
pub use episode::Episode;
pub use feed::NewsFeed;
pub use podcast::{PlatformLinks, Podcast};
pub use view_type::{DisplayField, EpisodeLayout, FeedLayout, ViewType};

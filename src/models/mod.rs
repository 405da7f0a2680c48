pub mod media;
pub mod watchlist;

pub use media::parse_release_year;
pub use media::Candidate;
pub use media::MediaItem;
pub use media::MediaType;
pub use media::TitleDetails;
pub use media::TmdbGenre;
pub use media::TmdbMovieDetails;
pub use media::TmdbPage;
pub use media::TmdbRegionProviders;
pub use media::TmdbTvDetails;
pub use media::TmdbWatchProvidersResponse;
pub use media::WatchProvider;

pub use watchlist::JoinedList;
pub use watchlist::List;
pub use watchlist::ListItemView;
pub use watchlist::ListNameRequest;
pub use watchlist::ListWithItems;
pub use watchlist::MemberRequest;
pub use watchlist::RatingRequest;
pub use watchlist::UserIdentity;

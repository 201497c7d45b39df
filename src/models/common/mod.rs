pub mod import;
pub mod pagination;
pub mod response;

pub use import::{ImportRowError, ImportSummary};
pub use pagination::{
    NameLookupQuery, PageMeta, PaginatedResponse, PaginationQuery, deserialize_optional_i64,
};
pub use response::ApiResponse;

//! 필터가 적용된 목록 조회 공통 로직
//!
//! 엔티티별 필터 객체를 `ListFilter`로 구현하고, `filtered_list`/`filtered_page`에
//! 넘겨서 중복 없는 결과를 얻는다.

pub mod filter;
pub mod pagination;

pub use filter::{filtered_list, ListFilter, QueryParams};
pub use pagination::{filtered_page, resolve_page, Page, PageInfo};

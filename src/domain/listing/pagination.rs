use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};
use serde::Serialize;
use utoipa::ToSchema;

use super::filter::{filtered_select, ListFilter};

/// 페이지 조회 결과
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

/// 페이지 메타데이터
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// 현재 페이지 (1부터 시작)
    pub number: u64,
    pub num_pages: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// 요청된 페이지 번호를 실제 페이지로 보정합니다.
///
/// - 값이 없거나 정수가 아니면 1페이지
/// - 범위를 벗어나면 마지막 페이지
/// - `last`는 마지막 페이지
pub fn resolve_page(raw: Option<&str>, num_pages: u64) -> u64 {
    // 결과가 없어도 빈 1페이지는 존재한다
    let num_pages = num_pages.max(1);

    let Some(raw) = raw.map(str::trim) else {
        return 1;
    };

    if raw == "last" {
        return num_pages;
    }

    match raw.parse::<i64>() {
        Ok(n) if n >= 1 && (n as u64) <= num_pages => n as u64,
        Ok(_) => num_pages,
        Err(_) => 1,
    }
}

/// 필터를 적용한 목록을 페이지 단위로 조회합니다.
pub async fn filtered_page<E, F, C>(
    db: &C,
    filter: &F,
    per_page: u64,
    raw_page: Option<&str>,
) -> Result<Page<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
    F: ListFilter<E>,
    C: ConnectionTrait,
{
    let paginator = filtered_select::<E, F>(filter).paginate(db, per_page);
    let totals = paginator.num_items_and_pages().await?;

    let number = resolve_page(raw_page, totals.number_of_pages);
    let num_pages = totals.number_of_pages.max(1);
    let items = paginator.fetch_page(number - 1).await?;

    tracing::debug!(
        page = number,
        num_pages = num_pages,
        total_items = totals.number_of_items,
        "Fetched filtered page"
    );

    Ok(Page {
        items,
        info: PageInfo {
            number,
            num_pages,
            per_page,
            total_items: totals.number_of_items,
            has_next: number < num_pages,
            has_previous: number > 1,
        },
    })
}

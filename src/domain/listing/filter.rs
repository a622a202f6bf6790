use std::collections::HashMap;
use std::str::FromStr;

use sea_orm::sea_query::{Expr, IntoColumnRef, LikeExpr, SimpleExpr};
use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, Iterable, PrimaryKeyToColumn, QueryOrder, QuerySelect,
    Select,
};

/// 쿼리스트링 원본 (`?name=...&category=...`)
pub type QueryParams = HashMap<String, String>;

/// 쿼리스트링에서 만들어지는 필터 객체
///
/// 인식하지 못하는 파라미터는 무시하고, 값이 잘못된 필드는 필터가 없는 것으로 취급한다.
/// 직렬화 결과는 클라이언트가 필터 폼을 현재 값으로 다시 그릴 때 사용한다.
pub trait ListFilter<E: EntityTrait> {
    fn from_query(params: &QueryParams) -> Self;

    fn apply(&self, select: Select<E>) -> Select<E>;
}

/// 필터를 적용한 뒤 중복을 제거한 전체 목록
pub async fn filtered_list<E, F, C>(db: &C, filter: &F) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
    F: ListFilter<E>,
    C: ConnectionTrait,
{
    filtered_select::<E, F>(filter).all(db).await
}

/// 필터 + DISTINCT + 기본키 정렬이 적용된 select
pub(crate) fn filtered_select<E, F>(filter: &F) -> Select<E>
where
    E: EntityTrait,
    F: ListFilter<E>,
{
    order_by_primary_key(filter.apply(E::find()).distinct())
}

fn order_by_primary_key<E: EntityTrait>(mut select: Select<E>) -> Select<E> {
    for key in E::PrimaryKey::iter() {
        select = select.order_by_asc(key.into_column());
    }
    select
}

/// 공백을 제거한 비어있지 않은 문자열 파라미터
pub fn text_param(params: &QueryParams, key: &str) -> Option<String> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// 부분 일치 조건. `%`, `_`는 와일드카드가 아닌 문자 그대로 비교한다.
pub fn contains_literal<C: IntoColumnRef>(column: C, value: &str) -> SimpleExpr {
    Expr::col(column).like(LikeExpr::new(format!("%{}%", escape_like(value))).escape('\\'))
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 파싱 가능한 파라미터. 파싱에 실패하면 `None`
pub fn parsed_param<T: FromStr>(params: &QueryParams, key: &str) -> Option<T> {
    params.get(key).and_then(|v| v.trim().parse().ok())
}

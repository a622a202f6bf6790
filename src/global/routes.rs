//! 라우트 경로 (이름 있는 목적지)

pub const LIST_OF_EVENTS: &str = "/events";
pub const CREATE_NEW_EVENT: &str = "/events/new";
pub const EVENT_DETAILS: &str = "/events/:event_id";

pub const LIST_OF_RESTAURANTS: &str = "/restaurants";
pub const CREATE_NEW_RESTAURANT: &str = "/restaurants/new";

pub const LIST_OF_TTD: &str = "/things-to-do";
pub const CREATE_NEW_TTD: &str = "/things-to-do/new";

pub const CREATE_REVIEW: &str = "/reviews/new";

pub const HEALTH: &str = "/health";

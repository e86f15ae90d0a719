#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteResult {
    pub deleted_count: i64,
}

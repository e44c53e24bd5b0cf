
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod listing_test;
    pub mod purchase_test;
    pub mod resolve_test;
    pub mod views_test;
}

pub mod api_response;
pub mod row_id;
pub mod table;

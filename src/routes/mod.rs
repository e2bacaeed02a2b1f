pub mod info_routes;
pub mod result_routes;
pub mod ws_handler;

pub mod board_pool;

//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Cart handlers
    AddItemCommand, AddItemHandler, ClearCartCommand, ClearCartHandler, GetCartHandler,
    GetCartQuery, RemoveItemCommand, RemoveItemHandler, UpdateQuantityCommand,
    UpdateQuantityHandler,
    // Catalog handlers
    GetProductHandler, GetProductQuery, ListCategoriesHandler, SearchProductsHandler,
    SearchProductsResult,
    // Checkout handlers
    PlaceOrderCommand, PlaceOrderHandler, PlaceOrderResult, ValidateStepCommand,
    ValidateStepHandler, ValidateStepResult,
};

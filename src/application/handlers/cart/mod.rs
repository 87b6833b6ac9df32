//! Cart handlers.
//!
//! ## Commands
//! - Add one unit of a catalog product
//! - Remove a line
//! - Set a line's quantity
//! - Empty the cart
//!
//! ## Queries
//! - Get the current cart

mod add_item;
mod clear_cart;
mod get_cart;
mod remove_item;
mod update_quantity;

// Commands
pub use add_item::{AddItemCommand, AddItemHandler};
pub use clear_cart::{ClearCartCommand, ClearCartHandler};
pub use remove_item::{RemoveItemCommand, RemoveItemHandler};
pub use update_quantity::{UpdateQuantityCommand, UpdateQuantityHandler};

// Queries
pub use get_cart::{GetCartHandler, GetCartQuery};

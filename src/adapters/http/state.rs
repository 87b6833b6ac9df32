//! Shared state for the storefront endpoints.

use std::sync::Arc;
use std::time::Duration;

use crate::application::handlers::{
    AddItemHandler, ClearCartHandler, GetCartHandler, GetProductHandler, ListCategoriesHandler,
    PlaceOrderHandler, RemoveItemHandler, SearchProductsHandler, UpdateQuantityHandler,
    ValidateStepHandler, DEFAULT_ORDER_TIMEOUT,
};
use crate::domain::cart::PricingPolicy;
use crate::ports::{CartStore, ConfirmationNotifier, EventPublisher, OrderGateway, ProductCatalog};

/// Ports and settings the HTTP layer builds handlers from.
#[derive(Clone)]
pub struct StorefrontAppState {
    pub catalog: Arc<dyn ProductCatalog>,
    pub cart_store: Arc<dyn CartStore>,
    pub order_gateway: Arc<dyn OrderGateway>,
    pub notifier: Arc<dyn ConfirmationNotifier>,
    pub event_publisher: Arc<dyn EventPublisher>,
    pub pricing: PricingPolicy,
    pub order_timeout: Duration,
}

impl StorefrontAppState {
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        cart_store: Arc<dyn CartStore>,
        order_gateway: Arc<dyn OrderGateway>,
        notifier: Arc<dyn ConfirmationNotifier>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            catalog,
            cart_store,
            order_gateway,
            notifier,
            event_publisher,
            pricing: PricingPolicy::default(),
            order_timeout: DEFAULT_ORDER_TIMEOUT,
        }
    }

    pub fn with_pricing(mut self, pricing: PricingPolicy) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_order_timeout(mut self, timeout: Duration) -> Self {
        self.order_timeout = timeout;
        self
    }

    // Catalog

    pub fn get_product_handler(&self) -> GetProductHandler {
        GetProductHandler::new(self.catalog.clone())
    }

    pub fn search_products_handler(&self) -> SearchProductsHandler {
        SearchProductsHandler::new(self.catalog.clone())
    }

    pub fn list_categories_handler(&self) -> ListCategoriesHandler {
        ListCategoriesHandler::new(self.catalog.clone())
    }

    // Cart

    pub fn get_cart_handler(&self) -> GetCartHandler {
        GetCartHandler::new(self.cart_store.clone(), self.pricing)
    }

    pub fn add_item_handler(&self) -> AddItemHandler {
        AddItemHandler::new(self.catalog.clone(), self.cart_store.clone(), self.pricing)
    }

    pub fn remove_item_handler(&self) -> RemoveItemHandler {
        RemoveItemHandler::new(self.cart_store.clone(), self.pricing)
    }

    pub fn update_quantity_handler(&self) -> UpdateQuantityHandler {
        UpdateQuantityHandler::new(self.cart_store.clone(), self.pricing)
    }

    pub fn clear_cart_handler(&self) -> ClearCartHandler {
        ClearCartHandler::new(self.cart_store.clone(), self.pricing)
    }

    // Checkout

    pub fn validate_step_handler(&self) -> ValidateStepHandler {
        ValidateStepHandler::new()
    }

    pub fn place_order_handler(&self) -> PlaceOrderHandler {
        PlaceOrderHandler::new(
            self.cart_store.clone(),
            self.order_gateway.clone(),
            self.notifier.clone(),
            self.event_publisher.clone(),
            self.pricing,
        )
        .with_order_timeout(self.order_timeout)
    }
}

//! Orders module endpoints.
//!
//! This module implements order pricing, placement/replacement and cancellation.

use crate::client::QuestradeClient;
use crate::errors::QuestradeError;
use crate::helpers::path_segment;
use crate::orders::models::{DeleteOrderResponse, Order, OrderImpact, OrderRequest, PlaceOrderResponse};


const ORDERS: &str = "v1/accounts/{}/orders";


fn order_path(req: &OrderRequest) -> String {
    let base = ORDERS.replace("{}", &path_segment(&req.account_id));
    match req.order_id {
        Some(id) => format!("{base}/{id}"),
        None => base,
    }
}


impl QuestradeClient {

    /// Estimate the effect of an order without placing it.
    ///
    /// **Endpoint:** `POST v1/accounts/{number}/orders[/{orderId}]/impact`
    pub async fn get_order_impact(
        &self,
        req: &OrderRequest,
    ) -> Result<OrderImpact, QuestradeError> {
        let url = format!("{}/impact", order_path(req));
        self.authenticated_post(&url, req).await
    }


    /// Place a new order, or replace `req.order_id` if set.
    ///
    /// **Endpoint:** `POST v1/accounts/{number}/orders[/{orderId}]`
    ///
    /// # Returns
    /// The orders created by the request (more than one for bracket orders)
    pub async fn place_order(&self, req: &OrderRequest) -> Result<Vec<Order>, QuestradeError> {
        let data: PlaceOrderResponse = self.authenticated_post(&order_path(req), req).await?;
        Ok(data.orders)
    }


    /// Cancel an order.
    ///
    /// **Endpoint:** `DELETE v1/accounts/{number}/orders/{orderId}`
    ///
    /// # Returns
    /// The id of the cancelled order
    pub async fn delete_order(
        &self,
        account_number: &str,
        order_id: u64,
    ) -> Result<u64, QuestradeError> {
        let url = format!("{}/{}", ORDERS.replace("{}", &path_segment(account_number)), order_id);
        let data: DeleteOrderResponse = self.authenticated_delete(&url).await?;
        Ok(data.order_id)
    }
}

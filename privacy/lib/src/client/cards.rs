//! Card operations.

use std::fmt;

use tracing::warn;

use super::executor::PrivacyClient;
use crate::endpoint::{ApiRequest, CREATE_CARD, GET_CARD, LIST_CARDS, UPDATE_CARD};
use crate::error::PrivacyError;
use crate::models::{Card, CardListParams, Page};
use crate::transport::Transport;

impl<T: Transport> PrivacyClient<T> {
    /// Creates a virtual or physical card.
    ///
    /// `card` carries whatever the caller wants to set (type, memo, spend
    /// limit, ...). The returned card has its server-assigned token and
    /// creation timestamp filled in.
    ///
    /// ## Errors
    ///
    /// Returns an API error if the server rejects the payload, or a transport
    /// error if the request does not complete.
    pub async fn create_card(&self, card: &Card) -> Result<Card, PrivacyError> {
        if card.token.is_some() {
            warn!("token is server-assigned; the value on the create payload is sent as-is");
        }
        let request = ApiRequest::new(CREATE_CARD).json_body(card)?;
        self.execute(request).await
    }

    /// Updates the given fields of a card.
    ///
    /// Only fields set on `changes` are sent; everything else stays as it is
    /// on the server. Returns the full updated card.
    ///
    /// ## Errors
    ///
    /// Returns an API error if the card does not exist or the change is
    /// rejected, or a transport error if the request does not complete.
    pub async fn update_card(
        &self,
        card_id: impl fmt::Display,
        changes: &Card,
    ) -> Result<Card, PrivacyError> {
        let request = ApiRequest::new(UPDATE_CARD)
            .path_param("cardId", card_id.to_string())
            .json_body(changes)?;
        self.execute(request).await
    }

    /// Lists cards managed by the calling API key's program.
    ///
    /// ## Errors
    ///
    /// Returns an API error if the filters are rejected, or a transport error
    /// if the request does not complete.
    pub async fn list_cards(&self, params: &CardListParams) -> Result<Page<Card>, PrivacyError> {
        let request = ApiRequest::new(LIST_CARDS).query(params.query_pairs());
        self.execute(request).await
    }

    /// Gets one card by token, or behaves like [`list_cards`](Self::list_cards)
    /// when no token is given.
    ///
    /// The result is always a page; for a token it holds that card (or
    /// nothing). Filters are sent alongside a token if the caller supplies
    /// them; the server decides whether that combination is valid.
    ///
    /// ## Errors
    ///
    /// Returns an API error if the server rejects the request, or a transport
    /// error if the request does not complete.
    pub async fn get_card(
        &self,
        card_token: Option<&str>,
        params: &CardListParams,
    ) -> Result<Page<Card>, PrivacyError> {
        let Some(card_token) = card_token else {
            return self.list_cards(params).await;
        };

        let request = ApiRequest::new(GET_CARD)
            .path_param("cardToken", card_token)
            .query(params.query_pairs());
        self.execute(request).await
    }
}

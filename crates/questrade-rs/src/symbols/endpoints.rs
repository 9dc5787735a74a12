//! Symbols module endpoints.

use crate::client::QuestradeClient;
use crate::errors::QuestradeError;
use crate::helpers::join_ids;
use crate::symbols::models::{
    GetOptionChainResponse, GetSymbolsResponse, OptionChain, SearchSymbolsQuery,
    SearchSymbolsResponse, Symbol, SymbolSearchResult,
};


const GET_SYMBOLS: &str = "v1/symbols";
const SEARCH_SYMBOLS: &str = "v1/symbols/search";
const GET_OPTION_CHAIN: &str = "v1/symbols/{}/options";


impl QuestradeClient {

    /// Detailed information for the given symbol ids, in request order.
    ///
    /// **Endpoint:** `GET v1/symbols?ids=...`
    pub async fn get_symbols(&self, ids: &[u64]) -> Result<Vec<Symbol>, QuestradeError> {
        let query = [("ids", join_ids(ids))];
        let data: GetSymbolsResponse = self.authenticated_get(GET_SYMBOLS, Some(&query)).await?;
        Ok(data.symbols)
    }


    /// Symbols matching `prefix`, starting `offset` results into the match list.
    ///
    /// **Endpoint:** `GET v1/symbols/search`
    pub async fn search_symbols(
        &self,
        prefix: &str,
        offset: u32,
    ) -> Result<Vec<SymbolSearchResult>, QuestradeError> {
        let query = SearchSymbolsQuery { prefix, offset };
        let data: SearchSymbolsResponse = self
            .authenticated_get(SEARCH_SYMBOLS, Some(&query))
            .await?;
        Ok(data.symbols)
    }


    /// Option chain of an underlying symbol.
    ///
    /// **Endpoint:** `GET v1/symbols/{id}/options`
    pub async fn get_option_chain(&self, id: u64) -> Result<Vec<OptionChain>, QuestradeError> {
        let url = GET_OPTION_CHAIN.replace("{}", &id.to_string());
        let data: GetOptionChainResponse = self.authenticated_get::<_, ()>(&url, None).await?;
        Ok(data.option_chain)
    }
}

//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::PaginationParams;

/// Shared pagination arguments for list commands.
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Page number (1-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<usize>,

    /// Results per page (max 100)
    #[arg(long, short = 'n')]
    pub per_page: Option<usize>,
}

impl PaginationArgs {
    /// Convert CLI args to API pagination params.
    pub fn to_params(&self) -> PaginationParams {
        let mut params = PaginationParams::new();

        if let Some(page) = self.page {
            params = params.page(page);
        }
        if let Some(size) = self.per_page {
            params = params.per_page(size);
        }

        params
    }
}

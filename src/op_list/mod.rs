//! List of operations
pub mod account_merge;
pub mod allow_trust;
pub mod begin_sponsoring_future_reserves;
pub mod bump_sequence;
pub mod change_trust;
pub mod claim_claimable_balance;
pub mod clawback;
pub mod clawback_claimable_balance;
pub mod create_account;
pub mod create_claimable_balance;
pub mod create_passive_sell_offer;
pub mod end_sponsoring_future_reserves;
pub mod extend_footprint_ttl;
pub mod invoke_host;
pub mod liquidity_pool_deposit;
pub mod liquidity_pool_withdraw;
pub mod manage_buy_offer;
pub mod manage_data;
pub mod manage_sell_offer;
pub mod path_payment_strict_receive;
pub mod path_payment_strict_send;
pub mod payment;
pub mod restore_footprint;
pub mod revoke_sponsorship;
pub mod set_options;
pub mod set_trustline_flags;

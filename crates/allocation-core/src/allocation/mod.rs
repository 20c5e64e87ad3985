pub mod assets;
pub mod tables;

pub use assets::{build_asset_data, build_custom_asset_data, unknown_assets, AssetData};
pub use tables::{
    select_allocation, Allocation, AllocationEntry, CustomAllocation, CustomAllocationEntry,
};

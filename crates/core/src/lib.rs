#![forbid(unsafe_code)]

pub mod filter;

pub mod model {
    /// Entity families served by the listing engine. Each family maps to one
    /// table plus the unit -> property -> city belongs-to chain; vendor tasks
    /// additionally reference a vendor.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum EntityKind {
        MoveIn,
        MoveOut,
        VendorTask,
        PaymentPlan,
    }

    impl EntityKind {
        pub fn as_str(&self) -> &'static str {
            match self {
                Self::MoveIn => "move_in",
                Self::MoveOut => "move_out",
                Self::VendorTask => "vendor_task",
                Self::PaymentPlan => "payment_plan",
            }
        }

        pub const ALL: [EntityKind; 4] = [
            Self::MoveIn,
            Self::MoveOut,
            Self::VendorTask,
            Self::PaymentPlan,
        ];
    }

    /// Status value the default listing filter excludes.
    pub const COMPLETED_STATUS: &str = "Completed";
}

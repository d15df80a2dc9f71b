//! Repository abstractions for data access.

pub mod client;
pub mod lookup;
pub mod prospect;
pub mod seller;
pub mod visit_report;

pub use client::ClientRepository;
pub use lookup::LookupRepository;
pub use prospect::ProspectRepository;
pub use seller::SellerRepository;
pub use visit_report::VisitReportRepository;

mod election_service;

pub use election_service::ElectionService;

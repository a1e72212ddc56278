//! Page Components

mod chat;
mod content;
mod dashboard;
mod home;
mod pricing;

pub use chat::ChatPage;
pub use content::ContentPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use pricing::PricingPage;

pub mod about;
pub mod connect_agent;
pub mod contact;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod intake;
pub mod listings;
pub mod login;
pub mod price_check;
pub mod signup;

pub use about::about_page;
pub use connect_agent::connect_agent_page;
pub use contact::contact_page;
pub use dashboard::dashboard_page;
pub use forgot_password::{forgot_password_page, ResetStep};
pub use home::home_page;
pub use intake::{
    buyer_form_page, edit_listing_page, payload_rows, preview_page, seller_form_page, Preview,
};
pub use listings::{browse_page, listing_details_page, BrowseVm};
pub use login::login_page;
pub use price_check::price_check_page;
pub use signup::{signup_page, SignupStep};

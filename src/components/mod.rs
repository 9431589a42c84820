//! UI Components
//!
//! Leptos view components, one per screen or widget.

mod cart_panel;
mod chef_dashboard;
mod customize_modal;
mod feedback_form;
mod login_form;
mod menu_item_card;
mod menu_view;
mod nav_bar;
mod notification;
mod order_detail;
mod order_history;
mod register_form;

pub use cart_panel::CartPanel;
pub use chef_dashboard::ChefDashboard;
pub use customize_modal::CustomizeModal;
pub use feedback_form::FeedbackForm;
pub use login_form::LoginForm;
pub use menu_item_card::MenuItemCard;
pub use menu_view::MenuView;
pub use nav_bar::NavBar;
pub use notification::NotificationToast;
pub use order_detail::OrderDetail;
pub use order_history::OrderHistory;
pub use register_form::RegisterForm;

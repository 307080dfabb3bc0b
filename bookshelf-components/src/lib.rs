//! Components, browser helpers and backend services shared across the app

pub mod browser;
pub mod buttons;
pub mod cards;
pub mod icons;
pub mod modal;
pub mod pickup;
pub mod services;

pub const PRIMARY_BUTTON_CLASSES: &str = "px-6 py-2 rounded-lg text-white bg-blue-600 hover:bg-blue-700 transition disabled:opacity-50";
pub const CONFIRM_BUTTON_CLASSES: &str = "px-4 py-2 rounded-lg text-white bg-green-600 hover:bg-green-700 transition disabled:opacity-50 disabled:cursor-not-allowed";
pub const NEUTRAL_BUTTON_CLASSES: &str = "px-4 py-2 rounded-lg text-white bg-gray-500 hover:bg-gray-600";

pub const CARD_CLASSES: &str = "p-4 bg-white border border-gray-200 rounded-lg shadow-md hover:shadow-lg transition-shadow";
pub const CARD_GRID_CLASSES: &str = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 mt-6";

//! Components for viewing and editing books, and the client they use to talk to the books API

pub mod buttons;
pub mod editor;
pub mod icons;
pub mod services;
pub mod session;
pub mod toast;
pub mod viewer;

#[cfg(test)]
mod test_util;

pub const DEFAULT_BUTTON_CLASSES: &str = "text-md m-2 rounded-2xl bg-slate-600 p-2 text-center font-bold text-slate-50 shadow-sm shadow-sky-600 hover:bg-slate-500";
pub const DANGER_BUTTON_CLASSES: &str = "text-md m-2 rounded-2xl bg-rose-700 p-2 text-center font-bold text-slate-50 shadow-sm shadow-rose-400 hover:bg-rose-600";
pub const INPUT_CLASSES: &str = "w-full rounded-lg border-2 border-slate-600 bg-slate-800 p-2 text-slate-50 focus:border-sky-600 focus:outline-none";
pub const CARD_CLASSES: &str = "w-full max-w-lg rounded-lg bg-slate-800 p-8 shadow-lg shadow-sky-600/30";

//! Shared styling constants so the pages stay visually consistent.

pub const BTN_PRIMARY: &str = "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400 disabled:cursor-not-allowed disabled:opacity-40";
pub const BTN_SECONDARY: &str = "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800 disabled:cursor-not-allowed disabled:opacity-40";

pub const INPUT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none";
pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";
pub const SECTION_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";
pub const TEXT_MUTED: &str = "text-sm text-slate-400";

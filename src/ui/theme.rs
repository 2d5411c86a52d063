//! Shared style classes so pages and components stay visually consistent.

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400";
pub const BTN_SECONDARY: &str =
    "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800";
pub const BTN_DANGER: &str =
    "rounded px-2 py-1 text-xs text-rose-300 border border-rose-500/60 hover:bg-rose-500/10";

pub const INPUT: &str =
    "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none";
pub const SELECT: &str =
    "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none cursor-pointer";
pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40 p-6";
pub const PANEL_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";

pub const TABLE_CONTAINER: &str =
    "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden";
pub const TABLE_HEADER: &str =
    "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500";
pub const TABLE_DIVIDER: &str = "divide-y divide-slate-800";

pub const TEXT_MUTED: &str = "text-slate-500";

pub const NAV_ACTIVE: &str =
    "rounded-lg px-3 py-1.5 text-sm font-semibold bg-indigo-500/20 text-indigo-300 border border-indigo-500/40";
pub const NAV_INACTIVE: &str =
    "rounded-lg px-3 py-1.5 text-sm text-slate-400 border border-slate-700 hover:border-slate-600 hover:text-slate-200";

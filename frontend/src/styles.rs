pub const PAGE: &str = "relative min-h-screen overflow-hidden bg-[#071430] text-white flex items-center justify-center px-4";
pub const CARD: &str = "relative z-10 w-full max-w-md mx-auto bg-white/5 backdrop-blur-md rounded-2xl shadow-2xl border border-white/10 p-6 sm:p-8 text-center";
pub const TITLE: &str = "text-2xl sm:text-3xl font-bold mb-2 bg-clip-text text-transparent bg-gradient-to-r from-sky-300 to-violet-400";
pub const STATUS: &str = "text-sm text-sky-200/80 mb-4 min-h-[1.25rem]";
pub const WHEEL_WRAP: &str = "relative mx-auto mb-6 w-full max-w-[340px]";
pub const WHEEL_CANVAS: &str = "w-full h-auto rounded-full drop-shadow-[0_8px_30px_rgba(79,173,255,0.25)]";
pub const SOUND_BUTTON: &str = "absolute top-0 right-0 z-20 p-2 text-xl rounded-full bg-white/10 hover:bg-white/20 transition-colors";
pub const LOCK_TIMER: &str = "mb-4 text-sm font-mono font-semibold text-amber-300 bg-amber-400/10 border border-amber-300/30 rounded-lg px-3 py-2 inline-block";
pub const SPIN_BUTTON: &str = "w-full max-w-[280px] mx-auto py-3 px-8 rounded-full font-bold text-lg text-white bg-gradient-to-r from-rose-500 to-orange-400 hover:from-rose-600 hover:to-orange-500 shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0 transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed disabled:transform-none";
pub const RESULT_PANEL: &str = "mt-6 rounded-xl bg-white/5 border border-white/10 p-5";
pub const SUSPENSE: &str = "text-lg font-semibold text-sky-200 animate-pulse";
pub const WIN_TEXT: &str = "text-xl font-bold text-emerald-300 mb-4";
pub const META_GRID: &str = "grid grid-cols-3 gap-2 text-xs text-sky-100/80 mb-4";
pub const META_CELL: &str = "bg-white/5 rounded-lg px-2 py-2";
pub const META_LABEL: &str = "block text-[0.65rem] uppercase tracking-wide text-sky-300/60 mb-1";
pub const SS_WRAP: &str = "text-sm text-sky-100/90";
pub const SS_COUNT: &str = "inline-block min-w-[2.5rem] font-mono text-2xl font-bold text-sky-300";
pub const SS_COUNT_DANGER: &str = "inline-block min-w-[2.5rem] font-mono text-2xl font-bold text-rose-400 animate-pulse";
pub const EXPIRED: &str = "text-sm font-semibold text-rose-300/90";
pub const DECOR_CANVAS: &str = "fixed inset-0 w-full h-full pointer-events-none";

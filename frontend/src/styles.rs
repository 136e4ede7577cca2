pub const TEXT_H1: &str = "text-3xl font-bold text-center mb-8 text-gray-800";
pub const PAGE_GRID: &str = "grid grid-cols-1 md:grid-cols-2 gap-12";
pub const WHEEL_SECTION: &str = "relative aspect-square flex items-center justify-center p-4";
pub const LEGEND_ROW: &str = "flex items-center gap-3 p-3 hover:bg-gray-50 rounded";
pub const INPUT_OPTION: &str = "flex-1 px-4 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500";
pub const BUTTON_ADD: &str = "p-2 w-10 bg-purple-500 text-white text-xl font-bold rounded-lg hover:bg-purple-600 transition-colors disabled:bg-gray-300";
pub const BUTTON_REMOVE: &str = "text-red-500 hover:text-red-700 disabled:text-gray-300";
pub const BUTTON_SPIN: &str = "w-full py-3 rounded-lg text-white text-lg font-semibold transition-colors bg-blue-500 hover:bg-blue-600";
pub const BUTTON_SPIN_DISABLED: &str = "w-full py-3 rounded-lg text-white text-lg font-semibold transition-colors bg-gray-400 cursor-not-allowed";
pub const EMPTY_WHEEL: &str = "w-full aspect-square rounded-full border-4 border-gray-300 flex items-center justify-center bg-gray-50";

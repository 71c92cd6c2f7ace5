pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8 py-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] max-w-2xl mx-auto border border-gray-100 dark:border-gray-700";
pub const TEXT_H1: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-yellow-400";
pub const SLOT_ROW: &str = "flex justify-center gap-4 my-8";
pub const SLOT_CELL: &str = "flex items-center justify-center w-24 h-24 text-6xl rounded-xl bg-gray-100 dark:bg-gray-700 shadow-inner select-none";
pub const SPIN_BUTTON: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg transition-all duration-300";
pub const SPIN_BUTTON_DISABLED: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed";
pub const RESULT_WIN: &str = "px-6 py-4 rounded-xl bg-gradient-to-r from-yellow-400 to-orange-500 text-white font-bold text-xl shadow-lg text-center";
pub const RESULT_LOSE: &str = "px-6 py-4 rounded-xl bg-gray-200 dark:bg-gray-700 text-gray-800 dark:text-gray-200 font-bold text-xl text-center";
pub const PAYTABLE: &str = "grid grid-cols-2 gap-2 mt-8 text-center bg-gray-50 dark:bg-gray-700/30 p-4 rounded-xl";

/// Class toggled on a paytable row while it pulses.
pub const PULSATE: &str = "pulsate";

pub const SLOT_CSS: &str = r#"
@keyframes pulsate {
    0% { transform: scale(1); }
    50% { transform: scale(1.3); }
    100% { transform: scale(1); }
}

.pulsate {
    animation: pulsate 0.5s ease-in-out 2;
}

.result-message {
    transition: opacity 0.6s ease-out;
}

.result-hidden {
    opacity: 0;
    pointer-events: none;
}

#emoji-rain {
    position: fixed;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
    z-index: 50;
}

#emoji-rain .emoji {
    position: absolute;
    top: -3rem;
    font-size: 2rem;
    animation-name: fall;
    animation-timing-function: linear;
    animation-fill-mode: forwards;
}

@keyframes fall {
    to { transform: translateY(110vh) rotate(360deg); }
}
"#;

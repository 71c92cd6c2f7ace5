use shared::config::MultiplierEntry;
use shared::surface::{Particle, PulseTarget};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SlotRowProps {
    pub slots: Vec<String>,
}

#[function_component(SlotRow)]
pub fn slot_row(props: &SlotRowProps) -> Html {
    html! {
        <div class={styles::SLOT_ROW}>
            { for props.slots.iter().enumerate().map(|(i, symbol)| html! {
                <div key={i} id={format!("slot{}", i + 1)} class={styles::SLOT_CELL}>
                    {symbol.clone()}
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultBannerProps {
    pub message: Option<String>,
    pub visible: bool,
    pub won: bool,
}

/// Stays mounted after the message fades so the opacity transition can run.
#[function_component(ResultBanner)]
pub fn result_banner(props: &ResultBannerProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };

    let tone = if props.won { styles::RESULT_WIN } else { styles::RESULT_LOSE };
    let hidden = (!props.visible).then_some("result-hidden");

    html! {
        <div id="result-message" class={classes!("result-message", tone, hidden)}>
            <span>{message}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaytableProps {
    pub entries: Vec<MultiplierEntry>,
    pub pulsating: Vec<PulseTarget>,
}

#[function_component(Paytable)]
pub fn paytable(props: &PaytableProps) -> Html {
    if props.entries.is_empty() {
        return html! {};
    }

    let rows = props.entries.iter().map(|entry| {
        let label = format!("x{}", entry.multiplier);
        let symbol_on = props.pulsating.iter().any(|t| t.symbol == entry.symbol);
        let label_on = props.pulsating.iter().any(|t| t.multiplier_label == label);
        html! {
            <>
                <div class={classes!("text-3xl", symbol_on.then_some(styles::PULSATE))}>
                    {entry.symbol.clone()}
                </div>
                <div class={classes!("text-xl", "font-bold", "text-gray-900", "dark:text-white", label_on.then_some(styles::PULSATE))}>
                    {label}
                </div>
            </>
        }
    });

    html! {
        <div class={styles::PAYTABLE}>
            { for rows }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmojiRainProps {
    pub particles: Vec<Particle>,
}

#[function_component(EmojiRain)]
pub fn emoji_rain(props: &EmojiRainProps) -> Html {
    html! {
        <div id="emoji-rain">
            { for props.particles.iter().map(|p| html! {
                <div
                    key={p.id.0}
                    class="emoji"
                    style={format!("left: {:.2}vw; animation-duration: {:.2}s;", p.left_vw, p.lifetime_secs)}
                >
                    {p.symbol.clone()}
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinControlsProps {
    pub bet_ref: NodeRef,
    pub min_bet: f64,
    pub enabled: bool,
    pub onspin: Callback<()>,
}

/// Bet field and spin button. Enter in the field spins too.
#[function_component(SpinControls)]
pub fn spin_controls(props: &SpinControlsProps) -> Html {
    let onclick = {
        let onspin = props.onspin.clone();
        Callback::from(move |_: MouseEvent| onspin.emit(()))
    };
    let onkeydown = {
        let onspin = props.onspin.clone();
        let enabled = props.enabled;
        Callback::from(move |e: KeyboardEvent| {
            if enabled && e.key() == "Enter" {
                e.prevent_default();
                onspin.emit(());
            }
        })
    };

    let button_class = if props.enabled { styles::SPIN_BUTTON } else { styles::SPIN_BUTTON_DISABLED };

    html! {
        <div class="space-y-4">
            <div>
                <label for="bet-amount" class={styles::TEXT_LABEL}>{"Bet amount"}</label>
                <input
                    id="bet-amount"
                    ref={props.bet_ref.clone()}
                    type="number"
                    step="0.01"
                    min={props.min_bet.to_string()}
                    placeholder={format!("More than {}", props.min_bet)}
                    class={styles::INPUT}
                    {onkeydown}
                />
            </div>
            <button id="spin-button" {onclick} disabled={!props.enabled} class={button_class}>
                { if props.enabled { "Spin" } else { "Spinning..." } }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountBarProps {
    pub balance: Option<String>,
    pub level: Option<String>,
}

#[function_component(AccountBar)]
pub fn account_bar(props: &AccountBarProps) -> Html {
    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    html! {
        <div class="flex justify-between mb-4">
            <span class={styles::TEXT_SMALL}>
                {"Balance: "}<span id="balance" class="font-bold">{show(&props.balance)}</span>
            </span>
            <span class={styles::TEXT_SMALL}>
                {"Level: "}<span id="level" class="font-bold">{show(&props.level)}</span>
            </span>
        </div>
    }
}

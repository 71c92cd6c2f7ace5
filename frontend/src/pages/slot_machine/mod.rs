mod board;
mod widgets;

use std::rc::Rc;

use shared::{SlotAudio, SlotMachine, SlotSurface, SpinError};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::audio::{HtmlAudioCue, SPIN_SOUND_ID, VICTORY_SOUND_ID};
use crate::client::HttpOutcomeClient;
use crate::config::{get_asset_url, load_slot_config};
use crate::styles;
use crate::timers::BrowserScheduler;

use board::{BoardState, BoardSurface};
use widgets::{AccountBar, EmojiRain, Paytable, ResultBanner, SlotRow, SpinControls};

type Machine = SlotMachine<HttpOutcomeClient>;

fn build_machine(config: shared::SlotConfig, surface: Rc<BoardSurface>) -> Machine {
    let audio = SlotAudio {
        spin: Rc::new(HtmlAudioCue::new(SPIN_SOUND_ID)),
        victory: Rc::new(HtmlAudioCue::new(VICTORY_SOUND_ID)),
    };
    SlotMachine::new(
        config,
        HttpOutcomeClient::new(),
        SlotSurface::uniform(surface),
        audio,
        Rc::new(BrowserScheduler),
    )
}

#[function_component(SlotMachinePage)]
pub fn slot_machine_page() -> Html {
    // Slot animations live in a page-scoped stylesheet
    {
        use_effect_with((), move |_| {
            let style = window().and_then(|w| w.document()).and_then(|document| {
                let head = document.head()?;
                let style = document.create_element("style").ok()?;
                style.set_text_content(Some(styles::SLOT_CSS));
                head.append_child(&style).ok()?;
                Some(style)
            });

            move || {
                if let Some(style) = style {
                    style.remove();
                }
            }
        });
    }

    let config = use_memo((), |_| load_slot_config());
    let board = {
        let slot_count = config.slot_count;
        use_reducer(move || BoardState::new(slot_count))
    };
    let machine = {
        let config = config.clone();
        let dispatcher = board.dispatcher();
        use_memo((), move |_| {
            let surface = Rc::new(BoardSurface::new(dispatcher, config.slot_count));
            build_machine((*config).clone(), surface)
        })
    };
    let bet_ref = use_node_ref();

    let onspin = {
        let machine = machine.clone();
        let bet_ref = bet_ref.clone();
        Callback::from(move |_| {
            let Some(input) = bet_ref.cast::<HtmlInputElement>() else {
                log::error!("Bet field is not mounted");
                return;
            };
            let bet = input.value();
            let machine: Rc<Machine> = machine.clone();

            spawn_local(async move {
                match machine.spin(&bet).await {
                    Ok(()) => {}
                    Err(SpinError::Busy) => log::debug!("Ignoring spin while the reels are moving"),
                    Err(e) => gloo::dialogs::alert(&e.user_message()),
                }
            });
        })
    };

    let won = board.message.as_deref() == Some(config.win_message.as_str());

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CARD}>
                <h1 class={styles::TEXT_H1}>{"Emoji Pix"}</h1>
                <AccountBar balance={board.balance.clone()} level={board.level.clone()} />
                <SlotRow slots={board.slots.clone()} />
                <ResultBanner message={board.message.clone()} visible={board.message_visible} {won} />
                <div class="mt-6">
                    <SpinControls
                        bet_ref={bet_ref}
                        min_bet={config.min_bet}
                        enabled={board.spin_enabled}
                        {onspin}
                    />
                </div>
                <Paytable
                    entries={config.multipliers.entries().to_vec()}
                    pulsating={board.pulsating.clone()}
                />
            </div>
            <EmojiRain particles={board.particles.clone()} />
            <audio id={SPIN_SOUND_ID} src={get_asset_url("/static/sounds/spin.mp3")} preload="auto" />
            <audio id={VICTORY_SOUND_ID} src={get_asset_url("/static/sounds/victory.mp3")} preload="auto" />
        </div>
    }
}

use crate::utils::*;
use clap::Args;
use janken_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewGameState {
    Playing,
    Finished,
    /// Finished without a single miss.
    Perfect,
}

/// Engine plus whatever the screen remembers on top of it.
#[derive(Clone, Debug)]
pub(crate) struct GameSession {
    pub engine: game::RoundEngine,
    pub last_outcome: Option<game::RoundOutcome>,
}

impl GameSession {
    fn new(engine: game::RoundEngine) -> Self {
        Self {
            engine,
            last_outcome: None,
        }
    }

    fn view_state(&self) -> ViewGameState {
        let summary = self.engine.summary();
        match summary.state {
            game::EngineState::Playing => ViewGameState::Playing,
            game::EngineState::Finished if summary.score == summary.total_rounds => {
                ViewGameState::Perfect
            }
            game::EngineState::Finished => ViewGameState::Finished,
        }
    }

    fn choose(&mut self, player_move: game::Move) -> bool {
        let result = self.engine.submit_move(player_move);
        let updated = result.has_update();
        match result {
            Ok(outcome) => self.last_outcome = Some(outcome),
            Err(err) => log::warn!("ignoring {}: {}", player_move, err),
        }
        updated
    }

    fn restart(&mut self) -> bool {
        self.engine.restart();
        self.last_outcome = None;
        true
    }

    fn feedback(&self) -> Option<&'static str> {
        self.last_outcome.map(|outcome| {
            if outcome.correct {
                "Nice!"
            } else {
                "Missed that one"
            }
        })
    }

    fn round_label(&self) -> String {
        format!(
            "Round {} of {}",
            self.engine.rounds_played() + 1,
            self.engine.total_rounds()
        )
    }

    fn score_label(&self) -> String {
        format!("{} / {}", self.engine.score(), self.engine.total_rounds())
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

/// A rejected submission leaves the engine untouched, so only the `Err` side ever skips a redraw.
impl<E> HasUpdate for Result<game::RoundOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::RoundOutcome| outcome.has_update())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Choose(game::Move),
    Restart,
}

#[derive(Properties, Clone, PartialEq)]
struct MoveButtonProps {
    player_move: game::Move,
    callback: Callback<game::Move>,
}

#[function_component(MoveButton)]
fn move_button(props: &MoveButtonProps) -> Html {
    let MoveButtonProps {
        player_move,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{} clicked", player_move);
        callback.emit(player_move);
    });

    html! {
        <button class={classes!("move", player_move.name())} title={player_move.name()} {onclick}>
            {player_move.glyph()}
        </button>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<String>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: GameSession,
}

impl GameView {
    fn view_playing(&self, ctx: &Context<Self>) -> Html {
        let challenge = self.game.engine.challenge();
        let callback = ctx.link().callback(Msg::Choose);

        html! {
            <>
                <p class="directive">{challenge.directive_label()}</p>
                <div class={classes!("shown", challenge.shown_move.name())} title={challenge.shown_move.name()}>
                    {challenge.shown_move.glyph()}
                </div>
                <nav class="moves">
                    {
                        for game::Move::ALL.into_iter().map(|player_move| html! {
                            <MoveButton {player_move} callback={callback.clone()}/>
                        })
                    }
                </nav>
                <small>{self.game.round_label()}</small>
                <small class="feedback">{self.game.feedback().unwrap_or_default()}</small>
            </>
        }
    }

    fn view_finished(&self, ctx: &Context<Self>) -> Html {
        let perfect = matches!(self.game.view_state(), ViewGameState::Perfect);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Msg::Restart);

        html! {
            <>
                <p>{"Your score"}</p>
                <p class={classes!("score", perfect.then_some("perfect"))}>{self.game.score_label()}</p>
                <button class="restart" onclick={cb_restart}>{"Restart"}</button>
            </>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx
            .props()
            .seed
            .as_deref()
            .map_or_else(js_random_seed, seed_from_str);
        log::info!("new game with seed {}", seed);

        Self {
            game: GameSession::new(game::RoundEngine::from_seed(seed)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Choose(player_move) => {
                log::debug!("choose: {}", player_move);
                self.game.choose(player_move)
            }
            Restart => {
                log::debug!("restart");
                self.game.restart()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.game.view_state() {
            ViewGameState::Playing => self.view_playing(ctx),
            ViewGameState::Finished | ViewGameState::Perfect => self.view_finished(ctx),
        };

        html! {
            <div class="janken">
                {body}
            </div>
        }
    }
}

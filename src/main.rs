use std::sync::Arc;

use dotenv::dotenv;
use quiz_bot::quiz::{QuestionBank, QuizState};
use quiz_bot::session::{self, Notice};
use quiz_bot::view::{self, Action, Screen};
use quiz_bot::config;
use teloxide::{
    dispatching::dialogue::{ErasedStorage, InMemStorage, Storage},
    prelude::*,
    types::ParseMode,
    utils::command::BotCommands,
    ApiError, RequestError,
};

type QuizDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerError = Box<dyn std::error::Error + Send + Sync>;
type HandlerResult = Result<(), HandlerError>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    Quiz {
        quiz: QuizState,
    },
}

type SessionStorage = std::sync::Arc<ErasedStorage<State>>;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
enum Command {
    #[command(description = "start a new quiz.")]
    Start,
    #[command(description = "clear all answers and begin again.")]
    Restart,
    #[command(description = "show this text.")]
    Help,
}

#[tokio::main]
async fn main() -> HandlerResult {
    let env_loaded = dotenv().is_ok();

    pretty_env_logger::init();
    log::info!("Starting quiz bot...");
    if !env_loaded {
        log::debug!("No .env file found, using the process environment");
    }

    let config = config::Config::from_env();
    let bank = Arc::new(config.load_bank()?);
    log::info!("Loaded {} questions", bank.len());

    let bot = Bot::from_env();
    bot.set_my_commands(Command::bot_commands()).await?;

    // Sessions live in memory only and are gone after a restart
    let storage: SessionStorage = InMemStorage::<State>::new().erase();

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .enter_dialogue::<Message, ErasedStorage<State>, State>()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_command),
                )
                .branch(dptree::endpoint(handle_text)),
        )
        .branch(
            Update::filter_callback_query()
                .enter_dialogue::<CallbackQuery, ErasedStorage<State>, State>()
                .endpoint(handle_action),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![storage, bank])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

const GREETING_TEXT: &str = "Hi! 🧠 Welcome to the Neural Quiz Challenge. \
Pick an answer for each question, jump around with the numbered buttons \
and submit once everything is answered.";
const HINT_TEXT: &str = "Use the buttons under the question to answer, or /start for a new quiz.";

async fn handle_command(
    bot: Bot,
    dialogue: QuizDialogue,
    bank: Arc<QuestionBank>,
    msg: Message,
    cmd: Command,
) -> HandlerResult {
    match cmd {
        Command::Start => {
            start_quiz(&bot, &dialogue, &bank, msg.chat.id).await?;
        }
        Command::Restart => {
            let mut quiz = current_quiz(&dialogue, &bank).await?;
            quiz.restart();
            log::debug!("chat {} restarted its quiz", msg.chat.id);

            send_screen(&bot, msg.chat.id, &bank, &quiz, Screen::Question).await?;
            dialogue.update(State::Quiz { quiz }).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
    }
    Ok(())
}

async fn handle_text(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, HINT_TEXT).await?;
    Ok(())
}

async fn start_quiz(
    bot: &Bot,
    dialogue: &QuizDialogue,
    bank: &QuestionBank,
    chat_id: ChatId,
) -> HandlerResult {
    bot.send_message(chat_id, GREETING_TEXT).await?;

    let quiz = QuizState::for_bank(bank);
    send_screen(bot, chat_id, bank, &quiz, Screen::Question).await?;

    dialogue.update(State::Quiz { quiz }).await?;
    Ok(())
}

async fn handle_action(
    bot: Bot,
    dialogue: QuizDialogue,
    bank: Arc<QuestionBank>,
    q: CallbackQuery,
) -> HandlerResult {
    let action = match q.data.as_deref().map(str::parse::<Action>) {
        Some(Ok(action)) => action,
        Some(Err(err)) => {
            log::warn!("chat {}: {}", dialogue.chat_id(), err);
            bot.answer_callback_query(q.id)
                .text(format!("Unknown button: {}", err))
                .show_alert(true)
                .await?;
            return Ok(());
        }
        None => {
            bot.answer_callback_query(q.id).await?;
            return Ok(());
        }
    };

    let mut quiz = current_quiz(&dialogue, &bank).await?;
    let step = match session::apply(&bank, &mut quiz, action) {
        Ok(step) => step,
        Err(err) => {
            // Buttons only carry valid indices, so this is a wiring bug
            log::warn!("chat {}: rejected {:?}: {}", dialogue.chat_id(), action, err);
            bot.answer_callback_query(q.id)
                .text(format!("Something went wrong: {}", err))
                .show_alert(true)
                .await?;
            return Ok(());
        }
    };
    dialogue.update(State::Quiz { quiz: quiz.clone() }).await?;

    let answer = bot.answer_callback_query(q.id);
    match step.notice {
        Some(Notice::Toast(text)) => answer.text(text).await?,
        Some(Notice::Alert(text)) => answer.text(text).show_alert(true).await?,
        None => answer.await?,
    };

    match q.message {
        Some(message) => edit_screen(&bot, &message, &bank, &quiz, step.screen).await,
        None => send_screen(&bot, dialogue.chat_id(), &bank, &quiz, step.screen).await,
    }
}

/// The chat's quiz, or a fresh one when there is none yet or it was built for
/// a different set of questions.
async fn current_quiz(
    dialogue: &QuizDialogue,
    bank: &QuestionBank,
) -> Result<QuizState, HandlerError> {
    Ok(match dialogue.get().await? {
        Some(State::Quiz { quiz }) if quiz.question_count() == bank.len() => quiz,
        _ => QuizState::for_bank(bank),
    })
}

async fn send_screen(
    bot: &Bot,
    chat_id: ChatId,
    bank: &QuestionBank,
    quiz: &QuizState,
    screen: Screen,
) -> HandlerResult {
    let rendered = view::render(bank, quiz, screen);
    bot.send_message(chat_id, rendered.text)
        .parse_mode(ParseMode::Html)
        .reply_markup(rendered.keyboard)
        .await?;
    Ok(())
}

async fn edit_screen(
    bot: &Bot,
    message: &Message,
    bank: &QuestionBank,
    quiz: &QuizState,
    screen: Screen,
) -> HandlerResult {
    let rendered = view::render(bank, quiz, screen);
    let result = bot
        .edit_message_text(message.chat.id, message.id, rendered.text)
        .parse_mode(ParseMode::Html)
        .reply_markup(rendered.keyboard)
        .await;

    match result {
        // Navigation at either end leaves the screen as it was
        Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

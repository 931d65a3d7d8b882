use compriassist_core::widgets::chat::{ChatView, Sender};
use compriassist_core::widgets::generative::{GenerativeOutputView, GenerativeView};
use compriassist_core::widgets::sentiment::{SentimentCard, SentimentPanelView, SentimentView};
use compriassist_core::widgets::visual::{ProductCardView, VisualResultsView, VisualSearchView};
use compriassist_core::{AppViewModel, BackendStatus};

use super::constants::*;
use super::page::PageCommand;

/// Full description of the page for a view model. The page itself drops
/// commands that change nothing.
pub fn render(view: &AppViewModel) -> Vec<PageCommand> {
    let mut cmds = Vec::new();

    cmds.push(text(BACKEND_STATUS, backend_label(view.backend)));

    cmds.push(class(NAVBAR, "scrolled", view.navigation.scrolled));
    cmds.push(class(NAV_MENU, "active", view.navigation.menu_open));
    for link in &view.navigation.links {
        cmds.push(class(&nav_link(&link.target), "active", link.active));
    }

    for pane in &view.tabs {
        cmds.push(class(&tab(&pane.pane), "active", pane.active));
    }

    cmds.push(class(SCROLL_TOP, "visible", view.scroll.scroll_top_visible));
    for (index, shown) in view.scroll.cards_shown.iter().enumerate() {
        cmds.push(class(&card(index), "visible", *shown));
    }
    for (index, value) in view.scroll.stats.iter().enumerate() {
        cmds.push(text(&stat(index), value));
    }

    render_chat(&view.chat, &mut cmds);
    render_sentiment(&view.sentiment, &mut cmds);
    render_visual(&view.visual, &mut cmds);
    render_generative(&view.generative, &mut cmds);

    cmds.push(text(CONTACT_BUTTON, &view.contact.button_label));
    cmds.push(enabled(CONTACT_BUTTON, !view.contact.button_disabled));

    cmds
}

fn backend_label(status: BackendStatus) -> &'static str {
    match status {
        BackendStatus::Unknown => "Backend: comprobando...",
        BackendStatus::Reachable => "Backend: conectado",
        BackendStatus::Unreachable => "Backend: sin conexión",
    }
}

fn render_chat(chat: &ChatView, cmds: &mut Vec<PageCommand>) {
    cmds.push(class(CHAT_WINDOW, "active", chat.open));
    cmds.push(text(CHAT_INPUT, &chat.input));

    let messages = chat
        .messages
        .iter()
        .map(|message| {
            let sender = match message.sender {
                Sender::User => "user",
                Sender::Bot => "bot",
            };
            let typing = if message.pending { " typing" } else { "" };
            format!(
                r#"<div class="message {sender}{typing}">{}</div>"#,
                message.html
            )
        })
        .collect::<String>();
    cmds.push(html(CHAT_MESSAGES, messages));

    let chips = chat
        .suggestions
        .iter()
        .enumerate()
        .map(|(index, chip)| {
            format!(r#"<button class="suggestion-chip" data-index="{index}">{chip}</button>"#)
        })
        .collect::<String>();
    cmds.push(html(CHAT_SUGGESTIONS, chips));
}

fn render_sentiment(sentiment: &SentimentView, cmds: &mut Vec<PageCommand>) {
    cmds.push(text(SENTIMENT_BUTTON, &sentiment.button.label));
    cmds.push(enabled(SENTIMENT_BUTTON, !sentiment.button.disabled));

    let (visible, body) = match &sentiment.panel {
        SentimentPanelView::Hidden => (false, String::new()),
        SentimentPanelView::Loading { message } => {
            (true, format!(r#"<div class="loading">{message}</div>"#))
        }
        SentimentPanelView::Card(card) => (true, sentiment_card(card)),
        SentimentPanelView::Error { message } => {
            (true, format!(r#"<div class="error">{message}</div>"#))
        }
    };
    cmds.push(visible_el(SENTIMENT_RESULT, visible));
    cmds.push(html(SENTIMENT_RESULT, body));
}

fn sentiment_card(card: &SentimentCard) -> String {
    let mut out = format!(
        r#"<div class="sentiment-header" style="color: {color}"><i class="fas {icon}"></i> {label} ({confidence}% confianza)</div>"#,
        color = card.color,
        icon = card.icon,
        label = card.label,
        confidence = card.confidence,
    );
    if let Some(fraud) = &card.fraud_alert {
        out.push_str(&format!(
            r#"<div class="fraud-alert">Posible reseña falsa ({fraud}%)</div>"#
        ));
    }
    for bar in &card.bars {
        out.push_str(&format!(
            r#"<div class="prob-bar"><span>{label}</span><div class="prob-fill {class}" style="width: {percent}%"></div><span>{percent}%</span></div>"#,
            label = bar.label,
            class = bar.class,
            percent = bar.percent,
        ));
    }
    out
}

fn render_visual(visual: &VisualSearchView, cmds: &mut Vec<PageCommand>) {
    cmds.push(class(UPLOAD_AREA, "dragover", visual.hovering));
    cmds.push(visible_el(UPLOAD_PREVIEW, visual.preview.is_some()));
    if let Some(preview) = &visual.preview {
        cmds.push(html(UPLOAD_PREVIEW, format!(r#"<img src="{preview}">"#)));
    }

    let body = match &visual.results {
        VisualResultsView::Idle => String::new(),
        VisualResultsView::Searching { message } => {
            format!(r#"<div class="loading">{message}</div>"#)
        }
        VisualResultsView::Cards(cards) => cards.iter().map(product_card).collect(),
        VisualResultsView::Empty { message } => format!(r#"<p class="empty">{message}</p>"#),
        VisualResultsView::Error { message } => format!(r#"<div class="error">{message}</div>"#),
    };
    cmds.push(html(VISUAL_RESULTS, body));
}

fn product_card(card: &ProductCardView) -> String {
    let price = card
        .price
        .as_deref()
        .map(|price| format!(r#"<p class="product-price">{price}</p>"#))
        .unwrap_or_default();
    format!(
        r#"<div class="product-card"><img src="{image}" alt="{name}"><h4>{name}</h4><span class="category">{category}</span>{price}<span class="similarity">{similarity}% similar</span></div>"#,
        image = card.image_url,
        name = card.name,
        category = card.category,
        similarity = card.similarity,
    )
}

fn render_generative(generative: &GenerativeView, cmds: &mut Vec<PageCommand>) {
    cmds.push(text(GENERATE_BUTTON, &generative.button.label));
    cmds.push(enabled(GENERATE_BUTTON, !generative.button.disabled));

    let (visible, body) = match &generative.output {
        GenerativeOutputView::Hidden => (false, String::new()),
        GenerativeOutputView::Loading { message } => {
            (true, format!(r#"<div class="loading">{message}</div>"#))
        }
        GenerativeOutputView::Text { visible, complete } => {
            let cursor = if *complete { "" } else { "▌" };
            (true, format!("<p>{visible}{cursor}</p>"))
        }
        GenerativeOutputView::Declined { message } => {
            (true, format!(r#"<p class="warning">{message}</p>"#))
        }
        GenerativeOutputView::Error { message } => {
            (true, format!(r#"<div class="error">{message}</div>"#))
        }
    };
    cmds.push(visible_el(GENERATED_OUTPUT, visible));
    cmds.push(html(GENERATED_OUTPUT, body));

    match &generative.badge {
        Some(badge) => {
            let label = match &badge.color {
                Some(color) => format!("{} [{color}]", badge.text),
                None => badge.text.clone(),
            };
            cmds.push(visible_el(MODEL_BADGE, true));
            cmds.push(text(MODEL_BADGE, &label));
        }
        None => cmds.push(visible_el(MODEL_BADGE, false)),
    }
}

fn text(id: &str, text: &str) -> PageCommand {
    PageCommand::SetText {
        id: id.to_string(),
        text: text.to_string(),
    }
}

fn html(id: &str, html: String) -> PageCommand {
    PageCommand::SetHtml {
        id: id.to_string(),
        html,
    }
}

fn class(id: &str, class: &str, on: bool) -> PageCommand {
    PageCommand::SetClass {
        id: id.to_string(),
        class: class.to_string(),
        on,
    }
}

fn enabled(id: &str, enabled: bool) -> PageCommand {
    PageCommand::SetEnabled {
        id: id.to_string(),
        enabled,
    }
}

fn visible_el(id: &str, visible: bool) -> PageCommand {
    PageCommand::SetVisible {
        id: id.to_string(),
        visible,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use compriassist_core::{update, AppState, Config, Msg};

    use super::*;
    use crate::platform::ui::layout::page_layout;
    use crate::platform::ui::page::ConsolePage;

    fn state() -> AppState {
        AppState::new(Arc::new(Config::default()), page_layout())
    }

    #[test]
    fn initial_render_shows_defaults() {
        let mut page = ConsolePage::new();
        page.apply(render(&state().view()));

        assert_eq!(page.content(BACKEND_STATUS), Some("Backend: comprobando..."));
        assert!(page.has_class(&tab("chatbot"), "active"));
        assert!(!page.has_class(&tab("visual"), "active"));
        assert_eq!(page.content(SENTIMENT_BUTTON), Some("Analizar Sentimiento"));
        assert!(page.is_enabled(GENERATE_BUTTON));
        assert_eq!(page.content(&stat(1)), Some("95%"));
    }

    #[test]
    fn chat_markup_is_escaped_and_marks_pending_replies() {
        let (state, _) = update(state(), Msg::ChatInputChanged("<b>hola</b>".to_string()));
        let (state, _) = update(state, Msg::ChatSubmitted);

        let mut page = ConsolePage::new();
        page.apply(render(&state.view()));
        let messages = page.content(CHAT_MESSAGES).unwrap_or_default();
        assert!(messages.contains("&lt;b&gt;hola&lt;/b&gt;"));
        assert!(!messages.contains("<b>"));
        assert!(messages.contains(r#"class="message bot typing""#));
    }

    #[test]
    fn busy_buttons_render_disabled() {
        let (state, _) = update(state(), Msg::ReviewChanged("Muy bueno".to_string()));
        let (state, _) = update(state, Msg::AnalyzeClicked);

        let mut page = ConsolePage::new();
        page.apply(render(&state.view()));
        assert_eq!(page.content(SENTIMENT_BUTTON), Some("Analizando..."));
        assert!(!page.is_enabled(SENTIMENT_BUTTON));
    }
}

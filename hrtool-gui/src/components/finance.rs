use hrtool_lib::finance;
use iced::{
    Element, Length,
    widget::{button, column, container, row, text, text_input},
};

#[derive(Debug, Clone)]
pub enum Message {
    DpAmountInput(String),
    HrcRateInput(String),
    CalculatePressed,
}

/// DP to HRC calculator. Keeps nothing beyond the two inputs and the last result.
#[derive(Debug, Default)]
pub struct FinancePage {
    dp_amount: String,
    hrc_rate: String,
    result: Option<String>,
}

impl FinancePage {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::DpAmountInput(content) => self.dp_amount = content,
            Message::HrcRateInput(content) => self.hrc_rate = content,
            Message::CalculatePressed => {
                self.result = Some(finance::calculate(&self.dp_amount, &self.hrc_rate).to_string());
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        container(
            column![
                text("Finance").size(24),
                row![
                    text("DP amount").width(120),
                    text_input("0", &self.dp_amount)
                        .on_input(Message::DpAmountInput)
                        .on_submit(Message::CalculatePressed),
                ]
                .spacing(8),
                row![
                    text("HRC per DP").width(120),
                    text_input("0", &self.hrc_rate)
                        .on_input(Message::HrcRateInput)
                        .on_submit(Message::CalculatePressed),
                ]
                .spacing(8),
                button("Calculate").on_press(Message::CalculatePressed),
                text(self.result.as_deref().unwrap_or_default()),
            ]
            .spacing(12)
            .max_width(480),
        )
        .padding(20)
        .width(Length::Fill)
        .into()
    }
}

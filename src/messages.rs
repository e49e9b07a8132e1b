/// Language used for every user-visible string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Vi,
}

/// Every piece of text the form can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Title,
    UrlLabel,
    UrlPlaceholder,
    SubscribeButton,
    ResolveButton,
    Processing,
    ChannelIdLabel,
    UrlEmpty,
    UrlInvalid,
    SubscribeSucceeded,
    ResolveSucceeded,
    SubscribeNotFound,
    ResolveNotFound,
    BackendUnreachable,
    HomeIntro,
    OpenForm,
    PageNotFound,
    BackHome,
}

impl Text {
    pub fn localize(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en(),
            Locale::Vi => self.vi(),
        }
    }

    fn en(self) -> &'static str {
        match self {
            Text::Title => "YouTube PubSubHubbub Tool",
            Text::UrlLabel => "Enter a YouTube channel URL:",
            Text::UrlPlaceholder => "https://www.youtube.com/@example",
            Text::SubscribeButton => "Subscribe",
            Text::ResolveButton => "Get Channel ID",
            Text::Processing => "Processing...",
            Text::ChannelIdLabel => "Channel ID:",
            Text::UrlEmpty => "URL must not be empty",
            Text::UrlInvalid => "URL is invalid",
            Text::SubscribeSucceeded => "PubSubHubbub subscription succeeded!",
            Text::ResolveSucceeded => "Channel ID retrieved!",
            Text::SubscribeNotFound => "Channel id not found or subscription failed.",
            Text::ResolveNotFound => "Channel id not found.",
            Text::BackendUnreachable => "Error calling backend",
            Text::HomeIntro => "Subscribe to push notifications for a YouTube channel.",
            Text::OpenForm => "Open the subscription form",
            Text::PageNotFound => "Page not found",
            Text::BackHome => "Back to home",
        }
    }

    fn vi(self) -> &'static str {
        match self {
            Text::Title => "YouTube PubSubHubbub Tool",
            Text::UrlLabel => "Nhập URL channel YouTube:",
            Text::UrlPlaceholder => "https://www.youtube.com/@example",
            Text::SubscribeButton => "Subscribe",
            Text::ResolveButton => "Get Channel ID",
            Text::Processing => "Đang xử lý...",
            Text::ChannelIdLabel => "Channel ID:",
            Text::UrlEmpty => "URL không được để trống",
            Text::UrlInvalid => "URL không hợp lệ.",
            Text::SubscribeSucceeded => "Đăng ký PubSubHubbub thành công!",
            Text::ResolveSucceeded => "Lấy Channel ID thành công!",
            Text::SubscribeNotFound => "Không tìm thấy channelId hoặc subscribe thất bại.",
            Text::ResolveNotFound => "Không tìm thấy channelId.",
            Text::BackendUnreachable => "Lỗi khi gọi API backend",
            Text::HomeIntro => "Đăng ký nhận thông báo cho một channel YouTube.",
            Text::OpenForm => "Mở form đăng ký",
            Text::PageNotFound => "Không tìm thấy trang",
            Text::BackHome => "Về trang chủ",
        }
    }
}

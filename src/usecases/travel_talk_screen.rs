use crate::domain::{
    chat::ChatRoom,
    message::Message,
    section_model::{DuplicateSectionError, SectionedListModel},
    snapshot::{CellContent, ListLayout},
    timestamp::format_short_date,
};

use super::{
    contracts::{CellFormatter, ListScreen, MissingDisplayDataError},
    list_surface::ListSurface,
    snapshot_applier::{ApplyError, ApplyReceipt, ListSnapshotApplier},
};

pub const TRAVEL_TALK_TITLE: &str = "Travel Talk";

/// Shown in place of the short date when a message timestamp cannot be read.
pub const DATE_FALLBACK: &str = "--.--.--";

pub const NO_MESSAGES_PLACEHOLDER: &str = "No messages yet";

pub fn mock_chat_rooms() -> Vec<ChatRoom> {
    vec![
        ChatRoom::new(1, "Hue").with_images(["Hue"]).with_messages(vec![
            Message::new("Hue", "2024-06-22 23:42", "왜요? 요즘 코딩이 대세인데"),
            Message::new("김새싹", "2024-06-22 23:43", "하하 그렇긴 하죠"),
            Message::new("Hue", "2024-06-23 09:12", "내일 오전 10시 공항에서 만나요!"),
        ]),
        ChatRoom::new(2, "Jack").with_images(["Jack"]).with_messages(vec![
            Message::new("Jack", "2024-06-24 08:01", "다들 여권 챙기셨죠?"),
            Message::new("김새싹", "2024-06-24 08:03", "넵 챙겼습니다"),
        ]),
        ChatRoom::new(3, "Bran").with_images(["Bran"]).with_messages(vec![Message::new(
            "Bran",
            "2024-06-11 18:20",
            "사진 공유 앨범 만들어 둘게요",
        )]),
        ChatRoom::new(4, "Den").with_images(["Den"]).with_messages(vec![
            Message::new("Den", "2024-05-31 13:00", "숙소 체크인은 3시부터래요"),
            Message::new("Den", "2024-06-01 21:47", "저녁은 야시장 어때요?"),
        ]),
        ChatRoom::new(5, "내옆자리의앞자리에개발잘하는친구")
            .with_images(["Bran", "Den", "Hue"])
            .with_messages(vec![
                Message::new("Bran", "2024-06-19 16:04", "다음 여행지 투표 올렸어요"),
                Message::new("Hue", "2024-06-20 10:30", "저는 다낭 찬성!"),
            ]),
        ChatRoom::new(6, "새 여행 모임").with_images(["Jack", "Hue"]),
    ]
}

/// One section per chat room, each holding only that room.
pub fn build_chat_rooms_model(
    rooms: &[ChatRoom],
) -> Result<SectionedListModel<i64, ChatRoom>, DuplicateSectionError> {
    SectionedListModel::from_sections(rooms.iter().map(|room| (room.room_id, vec![room.clone()])))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChatRoomCellFormatter;

impl CellFormatter<ChatRoom> for ChatRoomCellFormatter {
    fn format(&self, room: &ChatRoom) -> Result<CellContent, MissingDisplayDataError> {
        let last = room.last_message().ok_or_else(|| MissingDisplayDataError {
            item_id: room.room_id.to_string(),
            field: "last message",
        })?;

        let date = format_short_date(&last.date).unwrap_or_else(|error| {
            tracing::warn!(
                room_id = room.room_id,
                error = %error,
                "falling back to placeholder date"
            );
            DATE_FALLBACK.to_owned()
        });

        Ok(CellContent::titled(room.name.clone())
            .with_subtitle(last.preview())
            .with_detail(date)
            .with_image(room.avatar()))
    }

    fn placeholder(&self, room: &ChatRoom) -> CellContent {
        CellContent::titled(room.name.clone())
            .with_subtitle(NO_MESSAGES_PLACEHOLDER)
            .with_image(room.avatar())
    }
}

pub struct TravelTalkScreen {
    rooms: Vec<ChatRoom>,
    applier: ListSnapshotApplier<i64, ChatRoom, ListSurface, ChatRoomCellFormatter>,
}

impl TravelTalkScreen {
    pub fn new(rooms: Vec<ChatRoom>) -> Self {
        Self {
            rooms,
            applier: ListSnapshotApplier::new(
                ListSurface::new(ListLayout::plain()),
                ChatRoomCellFormatter,
            ),
        }
    }
}

impl ListScreen for TravelTalkScreen {
    fn title(&self) -> &str {
        TRAVEL_TALK_TITLE
    }

    fn surface(&self) -> &ListSurface {
        self.applier.surface()
    }

    fn surface_mut(&mut self) -> &mut ListSurface {
        self.applier.surface_mut()
    }

    fn reload(&mut self) -> Result<ApplyReceipt, ApplyError> {
        let model = build_chat_rooms_model(&self.rooms)?;
        self.applier.apply(model)
    }
}

use super::translations::Translations;

static VI: Translations = Translations {
    // --- Wallet card ---
    wallet_title: "Ví của tôi",
    wallet_balance_label: "Số dư",
    wallet_address_label: "Địa chỉ",
    wallet_copy_address: "Sao chép địa chỉ",

    // --- Modals ---
    modal_confirm: "Xác nhận",
    modal_cancel: "Hủy",
    modal_close: "Đóng",

    // --- Language selector ---
    language_selector_title: "Ngôn ngữ",

    // --- Transaction history ---
    tx_history_title: "Lịch sử giao dịch",
    tx_history_empty: "Chưa có giao dịch",
    tx_status_pending: "Đang chờ",
    tx_status_confirmed: "Đã xác nhận",
    tx_status_failed: "Thất bại",

    // --- Referral stats ---
    referral_title: "Giới thiệu",
    referral_invited_label: "Bạn bè đã mời",
    referral_rewards_label: "Phần thưởng đã nhận",
    referral_copy_link: "Sao chép liên kết mời",

    // --- Clipboard ---
    clipboard_copied: "Đã sao chép vào bộ nhớ tạm",
    clipboard_failed: "Không thể truy cập bộ nhớ tạm",

    // --- Startup ---
    language_applied: "Đã đặt ngôn ngữ thành {}",
};

pub fn translations() -> &'static Translations {
    &VI
}

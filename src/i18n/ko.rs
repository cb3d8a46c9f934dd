use super::translations::Translations;

static KO: Translations = Translations {
    // --- Wallet card ---
    wallet_title: "내 지갑",
    wallet_balance_label: "잔액",
    wallet_address_label: "주소",
    wallet_copy_address: "주소 복사",

    // --- Modals ---
    modal_confirm: "확인",
    modal_cancel: "취소",
    modal_close: "닫기",

    // --- Language selector ---
    language_selector_title: "언어",

    // --- Transaction history ---
    tx_history_title: "거래 내역",
    tx_history_empty: "거래 내역이 없습니다",
    tx_status_pending: "대기 중",
    tx_status_confirmed: "확인됨",
    tx_status_failed: "실패",

    // --- Referral stats ---
    referral_title: "추천",
    referral_invited_label: "초대한 친구",
    referral_rewards_label: "획득한 보상",
    referral_copy_link: "초대 링크 복사",

    // --- Clipboard ---
    clipboard_copied: "클립보드에 복사되었습니다",
    clipboard_failed: "클립보드에 접근할 수 없습니다",

    // --- Startup ---
    language_applied: "언어가 {}(으)로 설정되었습니다",
};

pub fn translations() -> &'static Translations {
    &KO
}

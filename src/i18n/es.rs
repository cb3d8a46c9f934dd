use super::translations::Translations;

static ES: Translations = Translations {
    // --- Wallet card ---
    wallet_title: "Mi Billetera",
    wallet_balance_label: "Saldo",
    wallet_address_label: "Dirección",
    wallet_copy_address: "Copiar Dirección",

    // --- Modals ---
    modal_confirm: "Confirmar",
    modal_cancel: "Cancelar",
    modal_close: "Cerrar",

    // --- Language selector ---
    language_selector_title: "Idioma",

    // --- Transaction history ---
    tx_history_title: "Historial de Transacciones",
    tx_history_empty: "Aún no hay transacciones",
    tx_status_pending: "Pendiente",
    tx_status_confirmed: "Confirmada",
    tx_status_failed: "Fallida",

    // --- Referral stats ---
    referral_title: "Referidos",
    referral_invited_label: "Amigos Invitados",
    referral_rewards_label: "Recompensas Obtenidas",
    referral_copy_link: "Copiar Enlace de Invitación",

    // --- Clipboard ---
    clipboard_copied: "Copiado al portapapeles",
    clipboard_failed: "No se pudo acceder al portapapeles",

    // --- Startup ---
    language_applied: "Idioma establecido en {}",
};

pub fn translations() -> &'static Translations {
    &ES
}

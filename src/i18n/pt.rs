use super::translations::Translations;

static PT: Translations = Translations {
    // --- Wallet card ---
    wallet_title: "Minha Carteira",
    wallet_balance_label: "Saldo",
    wallet_address_label: "Endereço",
    wallet_copy_address: "Copiar Endereço",

    // --- Modals ---
    modal_confirm: "Confirmar",
    modal_cancel: "Cancelar",
    modal_close: "Fechar",

    // --- Language selector ---
    language_selector_title: "Idioma",

    // --- Transaction history ---
    tx_history_title: "Histórico de Transações",
    tx_history_empty: "Nenhuma transação ainda",
    tx_status_pending: "Pendente",
    tx_status_confirmed: "Confirmada",
    tx_status_failed: "Falhou",

    // --- Referral stats ---
    referral_title: "Indicações",
    referral_invited_label: "Amigos Convidados",
    referral_rewards_label: "Recompensas Ganhas",
    referral_copy_link: "Copiar Link de Convite",

    // --- Clipboard ---
    clipboard_copied: "Copiado para a área de transferência",
    clipboard_failed: "Não foi possível acessar a área de transferência",

    // --- Startup ---
    language_applied: "Idioma definido como {}",
};

pub fn translations() -> &'static Translations {
    &PT
}

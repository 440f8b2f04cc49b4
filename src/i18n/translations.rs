//! Static translation tables, one per supported language.

pub(super) static ENGLISH: &[(&str, &str)] = &[
    ("gracehome_welcome", "Welcome to GraceHome"),
    ("dashboard", "Dashboard"),
    ("calendar", "Calendar"),
    ("finances", "Finances"),
    ("shopping", "Shopping List"),
    ("devotional", "Devotional"),
    ("settings", "Settings"),
    ("welcome_user", "Welcome back,"),
    ("todays_verse", "Today's Verse"),
    ("todays_verse_prompt", "Give me an inspiring bible verse for today, just the verse and its reference."),
    ("budget_overview", "Budget Overview"),
    ("total_spent_vs_budgeted", "Total Spent vs. Budgeted this month"),
    ("no_budget_set", "No budget set for this month."),
    ("upcoming_events", "Upcoming Events"),
    ("add_transaction", "Add Transaction"),
    ("edit_transaction", "Edit Transaction"),
    ("amount", "Amount"),
    ("date", "Date"),
    ("category", "Category"),
    ("notes", "Notes"),
    ("save_record", "Save Record"),
    ("update_record", "Update Record"),
    ("recent_transactions", "Recent Transactions"),
    ("actions", "Actions"),
    ("tithe", "Tithe"),
    ("offering", "Offering"),
    ("first_fruits", "First Fruits"),
    ("rent", "Rent"),
    ("insurance", "Insurance"),
    ("debt", "Debt"),
    ("transport", "Transport"),
    ("groceries", "Groceries"),
    ("other", "Other"),
    ("monthly_budgets", "Monthly Budgets"),
    ("manage_budgets", "Manage Budgets"),
    ("edit_budgets_for", "Edit Budgets for"),
    ("budget_goal", "Budget Goal"),
    ("set_goal", "Set Goal"),
    ("update_goal", "Update Goal"),
    ("spent_of", "{spent} of {total}"),
    ("no_budgets_set", "No Budgets Set"),
    ("add_first_budget", "Click \"Manage Budgets\" to add your first one."),
    ("add_event", "Add Event"),
    ("event_name", "Event Name"),
    ("description", "Description"),
    ("recurring_event", "Recurring Event"),
    ("add_item", "Add Item"),
    ("item_name", "Item Name"),
    ("quantity", "Quantity"),
    ("add_to_list", "Add to List"),
    ("purchased_items", "Purchased Items"),
    ("financial_study", "Financial Study: God's Way"),
    ("study_mode", "Study Mode"),
    ("review_mode", "Review Mode"),
    ("language", "Language"),
    ("currency", "Currency"),
    ("theme", "Theme"),
    ("light_mode", "Light Mode"),
    ("dark_mode", "Dark Mode"),
    ("no_transactions", "No Transactions Yet"),
    ("no_events", "No events"),
    ("events_on", "Events on"),
    ("score", "Score"),
    ("id", "ID"),
    ("once", "Once"),
    ("weekly", "Weekly"),
    ("monthly", "Monthly"),
    ("spent", "Spent"),
    ("remaining", "Remaining"),
    ("near_limit", "Near limit"),
    ("over_limit", "Over limit"),
    ("spending_history", "Spending History"),
    ("month", "Month"),
    ("name", "Name"),
    ("to_buy", "To Buy"),
    ("no_items", "Your shopping list is empty."),
    ("weekday_mon", "Mo"),
    ("weekday_tue", "Tu"),
    ("weekday_wed", "We"),
    ("weekday_thu", "Th"),
    ("weekday_fri", "Fr"),
    ("weekday_sat", "Sa"),
    ("weekday_sun", "Su"),
];

pub(super) static SPANISH: &[(&str, &str)] = &[
    ("gracehome_welcome", "Bienvenido a GraceHome"),
    ("dashboard", "Dashboard"),
    ("calendar", "Calendario"),
    ("finances", "Finanzas"),
    ("shopping", "Lista de Compras"),
    ("devotional", "Devocional"),
    ("settings", "Configuración"),
    ("welcome_user", "Bienvenido de nuevo,"),
    ("todays_verse", "Versículo del Día"),
    ("todays_verse_prompt", "Dame un versículo bíblico inspirador para hoy, solo el versículo y su referencia."),
    ("budget_overview", "Resumen de Presupuesto"),
    ("total_spent_vs_budgeted", "Gasto total vs. Presupuestado este mes"),
    ("no_budget_set", "No hay presupuesto establecido para este mes."),
    ("upcoming_events", "Próximos Eventos"),
    ("add_transaction", "Agregar Transacción"),
    ("edit_transaction", "Editar Transacción"),
    ("amount", "Monto"),
    ("date", "Fecha"),
    ("category", "Categoría"),
    ("notes", "Notas"),
    ("save_record", "Guardar Registro"),
    ("update_record", "Actualizar Registro"),
    ("recent_transactions", "Transacciones Recientes"),
    ("actions", "Acciones"),
    ("tithe", "Diezmo"),
    ("offering", "Ofrenda"),
    ("first_fruits", "Primicias"),
    ("rent", "Arriendo"),
    ("insurance", "Seguros"),
    ("debt", "Deudas"),
    ("transport", "Transporte"),
    ("groceries", "Compras"),
    ("other", "Otro"),
    ("monthly_budgets", "Presupuestos Mensuales"),
    ("manage_budgets", "Gestionar Presupuestos"),
    ("edit_budgets_for", "Editar Presupuestos para"),
    ("budget_goal", "Meta de Presupuesto"),
    ("set_goal", "Establecer Meta"),
    ("update_goal", "Actualizar Meta"),
    ("spent_of", "{spent} de {total}"),
    ("no_budgets_set", "No hay Presupuestos Establecidos"),
    ("add_first_budget", "Haz clic en \"Gestionar Presupuestos\" para añadir el primero."),
    ("add_event", "Agregar Evento"),
    ("event_name", "Nombre del Evento"),
    ("description", "Descripción"),
    ("recurring_event", "Evento Recurrente"),
    ("add_item", "Agregar Artículo"),
    ("item_name", "Nombre del Artículo"),
    ("quantity", "Cantidad"),
    ("add_to_list", "Añadir a la Lista"),
    ("purchased_items", "Artículos Comprados"),
    ("financial_study", "Estudio Financiero: A la Manera de Dios"),
    ("study_mode", "Modo Estudio"),
    ("review_mode", "Modo Repaso"),
    ("language", "Idioma"),
    ("currency", "Moneda"),
    ("theme", "Tema"),
    ("light_mode", "Modo Claro"),
    ("dark_mode", "Modo Oscuro"),
    ("no_transactions", "Aún no hay transacciones"),
    ("no_events", "No hay eventos"),
    ("events_on", "Eventos el"),
    ("score", "Puntuación"),
    ("id", "ID"),
    ("once", "Una vez"),
    ("weekly", "Semanal"),
    ("monthly", "Mensual"),
    ("spent", "Gastado"),
    ("remaining", "Restante"),
    ("near_limit", "Cerca del límite"),
    ("over_limit", "Límite superado"),
    ("spending_history", "Historial de gastos"),
    ("month", "Mes"),
    ("name", "Nombre"),
    ("to_buy", "Por comprar"),
    ("no_items", "Tu lista de compras está vacía."),
    ("weekday_mon", "Lu"),
    ("weekday_tue", "Ma"),
    ("weekday_wed", "Mi"),
    ("weekday_thu", "Ju"),
    ("weekday_fri", "Vi"),
    ("weekday_sat", "Sá"),
    ("weekday_sun", "Do"),
];

pub(super) static SWEDISH: &[(&str, &str)] = &[
    ("gracehome_welcome", "Välkommen till GraceHome"),
    ("dashboard", "Dashboard"),
    ("calendar", "Kalender"),
    ("finances", "Finanser"),
    ("shopping", "Inköpslista"),
    ("devotional", "Andakt"),
    ("settings", "Inställningar"),
    ("welcome_user", "Välkommen tillbaka,"),
    ("todays_verse", "Dagens bibelvers"),
    ("todays_verse_prompt", "Ge mig en inspirerande bibelvers för idag, bara versen och dess referens."),
    ("budget_overview", "Budgetöversikt"),
    ("total_spent_vs_budgeted", "Totala utgifter vs. Budgeterat denna månad"),
    ("no_budget_set", "Ingen budget angiven för denna månad."),
    ("upcoming_events", "Kommande händelser"),
    ("add_transaction", "Lägg till transaktion"),
    ("edit_transaction", "Redigera transaktion"),
    ("amount", "Belopp"),
    ("date", "Datum"),
    ("category", "Kategori"),
    ("notes", "Anteckningar"),
    ("save_record", "Spara post"),
    ("update_record", "Uppdatera post"),
    ("recent_transactions", "Senaste transaktioner"),
    ("actions", "Åtgärder"),
    ("tithe", "Tionde"),
    ("offering", "Offer"),
    ("first_fruits", "Förstlingsfrukt"),
    ("rent", "Hyra"),
    ("insurance", "Försäkring"),
    ("debt", "Skuld"),
    ("transport", "Transport"),
    ("groceries", "Matvaror"),
    ("other", "Övrigt"),
    ("monthly_budgets", "Månadsbudgetar"),
    ("manage_budgets", "Hantera budgetar"),
    ("edit_budgets_for", "Redigera budgetar för"),
    ("budget_goal", "Budgetmål"),
    ("set_goal", "Ange mål"),
    ("update_goal", "Uppdatera mål"),
    ("spent_of", "{spent} av {total}"),
    ("no_budgets_set", "Inga budgetar angivna"),
    ("add_first_budget", "Klicka på \"Hantera budgetar\" för att lägga till din första."),
    ("add_event", "Lägg till händelse"),
    ("event_name", "Händelsens namn"),
    ("description", "Beskrivning"),
    ("recurring_event", "Återkommande händelse"),
    ("add_item", "Lägg till vara"),
    ("item_name", "Varans namn"),
    ("quantity", "Kvantitet"),
    ("add_to_list", "Lägg till i listan"),
    ("purchased_items", "Köpta varor"),
    ("financial_study", "Ekonomisk Studie: På Guds Sätt"),
    ("study_mode", "Studiemodus"),
    ("review_mode", "Granskningsläge"),
    ("language", "Språk"),
    ("currency", "Valuta"),
    ("theme", "Tema"),
    ("light_mode", "Ljust läge"),
    ("dark_mode", "Mörkt läge"),
    ("no_transactions", "Inga transaktioner ännu"),
    ("no_events", "Inga händelser"),
    ("events_on", "Händelser den"),
    ("score", "Poäng"),
    ("id", "ID"),
    ("once", "En gång"),
    ("weekly", "Varje vecka"),
    ("monthly", "Varje månad"),
    ("spent", "Spenderat"),
    ("remaining", "Kvar"),
    ("near_limit", "Nära gränsen"),
    ("over_limit", "Över gränsen"),
    ("spending_history", "Utgiftshistorik"),
    ("month", "Månad"),
    ("name", "Namn"),
    ("to_buy", "Att köpa"),
    ("no_items", "Din inköpslista är tom."),
    ("weekday_mon", "Må"),
    ("weekday_tue", "Ti"),
    ("weekday_wed", "On"),
    ("weekday_thu", "To"),
    ("weekday_fri", "Fr"),
    ("weekday_sat", "Lö"),
    ("weekday_sun", "Sö"),
];

pub(super) static FRENCH: &[(&str, &str)] = &[
    ("gracehome_welcome", "Bienvenue à GraceHome"),
    ("dashboard", "Tableau de bord"),
    ("calendar", "Calendrier"),
    ("finances", "Finances"),
    ("shopping", "Liste de courses"),
    ("devotional", "Dévotion"),
    ("settings", "Paramètres"),
    ("welcome_user", "Bon retour,"),
    ("todays_verse", "Verset du jour"),
    ("todays_verse_prompt", "Donnez-moi un verset biblique inspirant pour aujourd'hui, juste le verset et sa référence."),
    ("budget_overview", "Aperçu du budget"),
    ("total_spent_vs_budgeted", "Total dépensé par rapport au budget ce mois-ci"),
    ("no_budget_set", "Aucun budget défini pour ce mois."),
    ("upcoming_events", "Événements à venir"),
    ("add_transaction", "Ajouter une transaction"),
    ("edit_transaction", "Modifier la transaction"),
    ("amount", "Montant"),
    ("date", "Date"),
    ("category", "Catégorie"),
    ("notes", "Remarques"),
    ("save_record", "Enregistrer"),
    ("update_record", "Mettre à jour"),
    ("recent_transactions", "Transactions récentes"),
    ("actions", "Actions"),
    ("tithe", "Dîme"),
    ("offering", "Offrande"),
    ("first_fruits", "Prémices"),
    ("rent", "Loyer"),
    ("insurance", "Assurance"),
    ("debt", "Dette"),
    ("transport", "Transport"),
    ("groceries", "Courses"),
    ("other", "Autre"),
    ("monthly_budgets", "Budgets mensuels"),
    ("manage_budgets", "Gérer les budgets"),
    ("edit_budgets_for", "Modifier les budgets pour"),
    ("budget_goal", "Objectif budgétaire"),
    ("set_goal", "Définir l'objectif"),
    ("update_goal", "Mettre à jour l'objectif"),
    ("spent_of", "{spent} sur {total}"),
    ("no_budgets_set", "Aucun budget défini"),
    ("add_first_budget", "Cliquez sur \"Gérer les budgets\" pour ajouter votre premier."),
    ("add_event", "Ajouter un événement"),
    ("event_name", "Nom de l'événement"),
    ("description", "Description"),
    ("recurring_event", "Événement récurrent"),
    ("add_item", "Ajouter un article"),
    ("item_name", "Nom de l'article"),
    ("quantity", "Quantité"),
    ("add_to_list", "Ajouter à la liste"),
    ("purchased_items", "Articles achetés"),
    ("financial_study", "Étude Financière : À la Manière de Dieu"),
    ("study_mode", "Mode Étude"),
    ("review_mode", "Mode Révision"),
    ("language", "Langue"),
    ("currency", "Devise"),
    ("theme", "Thème"),
    ("light_mode", "Mode clair"),
    ("dark_mode", "Mode sombre"),
    ("no_transactions", "Aucune transaction pour le moment"),
    ("no_events", "Aucun événement"),
    ("events_on", "Événements le"),
    ("score", "Score"),
    ("id", "ID"),
    ("once", "Une fois"),
    ("weekly", "Hebdomadaire"),
    ("monthly", "Mensuel"),
    ("spent", "Dépensé"),
    ("remaining", "Restant"),
    ("near_limit", "Proche de la limite"),
    ("over_limit", "Limite dépassée"),
    ("spending_history", "Historique des dépenses"),
    ("month", "Mois"),
    ("name", "Nom"),
    ("to_buy", "À acheter"),
    ("no_items", "Votre liste de courses est vide."),
    ("weekday_mon", "Lu"),
    ("weekday_tue", "Ma"),
    ("weekday_wed", "Me"),
    ("weekday_thu", "Je"),
    ("weekday_fri", "Ve"),
    ("weekday_sat", "Sa"),
    ("weekday_sun", "Di"),
];
